use uuid::Uuid;

use crate::domain::team::{NewTeam, ProcessedTeam, RawTeam};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    JsonStoreRepository, PROCESSED_TEAMS_STORE, ProcessedTeamReader, ProcessedTeamWriter,
    TEAMS_STORE, TeamReader, TeamWriter, not_found,
};

impl TeamReader for JsonStoreRepository {
    fn get_team(&self, id: &str) -> RepositoryResult<RawTeam> {
        let teams: Vec<RawTeam> = self.read_store(TEAMS_STORE)?;
        teams
            .into_iter()
            .find(|team| team.id == id)
            .ok_or_else(|| not_found("team", id))
    }

    fn list_teams(&self) -> RepositoryResult<Vec<RawTeam>> {
        self.read_store(TEAMS_STORE)
    }
}

impl TeamWriter for JsonStoreRepository {
    fn create_team(&self, team: NewTeam) -> RepositoryResult<RawTeam> {
        let raw = RawTeam {
            id: Uuid::new_v4().to_string(),
            team_name: team.team_name,
            full_name: team.full_name,
            manager_name: team.manager_name,
            email: team.email,
            documents: team.documents,
        };
        self.mutate_store(TEAMS_STORE, |teams: &mut Vec<RawTeam>| {
            teams.push(raw.clone());
            Ok(raw.clone())
        })
    }

    fn update_team(&self, id: &str, team: NewTeam) -> RepositoryResult<RawTeam> {
        self.mutate_store(TEAMS_STORE, |teams: &mut Vec<RawTeam>| {
            let position = teams
                .iter()
                .position(|existing| existing.id == id)
                .ok_or_else(|| not_found("team", id))?;
            // The record is replaced in place; the id is preserved.
            teams[position] = RawTeam {
                id: id.to_string(),
                team_name: team.team_name,
                full_name: team.full_name,
                manager_name: team.manager_name,
                email: team.email,
                documents: team.documents,
            };
            Ok(teams[position].clone())
        })
    }

    fn delete_team(&self, id: &str) -> RepositoryResult<usize> {
        self.mutate_store(TEAMS_STORE, |teams: &mut Vec<RawTeam>| {
            let before = teams.len();
            teams.retain(|team| team.id != id);
            Ok(before - teams.len())
        })
    }
}

impl ProcessedTeamReader for JsonStoreRepository {
    fn get_processed_team(&self, id: &str) -> RepositoryResult<ProcessedTeam> {
        let teams: Vec<ProcessedTeam> = self.read_store(PROCESSED_TEAMS_STORE)?;
        teams
            .into_iter()
            .find(|team| team.id == id)
            .ok_or_else(|| not_found("processed team", id))
    }

    fn list_processed_teams(&self) -> RepositoryResult<Vec<ProcessedTeam>> {
        self.read_store(PROCESSED_TEAMS_STORE)
    }
}

impl ProcessedTeamWriter for JsonStoreRepository {
    fn upsert_processed_team(&self, team: &ProcessedTeam) -> RepositoryResult<usize> {
        self.mutate_store(PROCESSED_TEAMS_STORE, |teams: &mut Vec<ProcessedTeam>| {
            match teams.iter().position(|existing| existing.id == team.id) {
                Some(position) => teams[position] = team.clone(),
                None => teams.push(team.clone()),
            }
            Ok(1)
        })
    }

    fn replace_processed_teams(&self, teams: &[ProcessedTeam]) -> RepositoryResult<usize> {
        self.replace_store(PROCESSED_TEAMS_STORE, teams)
    }

    fn delete_processed_team(&self, id: &str) -> RepositoryResult<usize> {
        self.mutate_store(PROCESSED_TEAMS_STORE, |teams: &mut Vec<ProcessedTeam>| {
            let before = teams.len();
            teams.retain(|team| team.id != id);
            Ok(before - teams.len())
        })
    }
}
