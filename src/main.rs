use std::sync::Arc;

use team_matcher::extraction::{EntityExtractor, Lexicon};
use team_matcher::models::config::ServerConfig;
use team_matcher::processing::ZMQMessage;
use team_matcher::processing::query::process_create_query_message;
use team_matcher::processing::rebuild::process_rebuild_message;
use team_matcher::processing::team::{
    process_create_team_message, process_delete_team_message, process_update_team_message,
};
use team_matcher::repository::JsonStoreRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let lexicon = match config.lexicon_file.as_deref() {
        Some(path) => match Lexicon::from_file(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                log::error!("Failed to load lexicon from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Lexicon::default(),
    };
    let extractor = Arc::new(EntityExtractor::new(lexicon));
    let repo = Arc::new(JsonStoreRepository::new(&config.store_dir));

    let context = zmq::Context::new();
    let responder = context.socket(zmq::PULL).expect("Cannot create zmq socket");
    responder
        .bind(&config.zmq_address)
        .expect("Cannot bind to zmq port");

    loop {
        let msg = responder.recv_bytes(0).unwrap();
        match serde_json::from_slice::<ZMQMessage>(&msg) {
            Ok(parsed) => {
                let repo = Arc::clone(&repo);
                let extractor = Arc::clone(&extractor);
                tokio::spawn(async move {
                    match parsed {
                        ZMQMessage::CreateTeam(team) => {
                            process_create_team_message(team, repo.as_ref(), extractor.as_ref())
                                .await
                        }
                        ZMQMessage::UpdateTeam { id, team } => {
                            process_update_team_message(
                                &id,
                                team,
                                repo.as_ref(),
                                extractor.as_ref(),
                            )
                            .await
                        }
                        ZMQMessage::DeleteTeam(id) => {
                            process_delete_team_message(&id, repo.as_ref()).await
                        }
                        ZMQMessage::CreateQuery(query) => {
                            process_create_query_message(query, repo.as_ref(), extractor.as_ref())
                                .await
                        }
                        ZMQMessage::Rebuild => {
                            process_rebuild_message(repo.as_ref(), extractor.as_ref()).await
                        }
                    }
                });
            }
            Err(e) => log::error!("Failed to parse JSON: {e}"),
        }
    }
}
