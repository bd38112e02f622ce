use serde::Serialize;

use crate::models::matches::{CreateMatchRequest, NewMatch, UpdateScoreRequest};

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 100;

/// A single field-level violation, reported back to the client in the
/// `details` array of a 400 response.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Centralized validation for match requests. Every check appends to a
/// shared issue list so a single response reports all violations at once.
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a creation body into a record ready for insertion.
    /// The caller derives and attaches the status.
    pub fn validate_create_match(
        &self,
        request: &CreateMatchRequest,
    ) -> Result<NewMatch, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let sport = self.required_text("sport", request.sport.as_deref(), &mut issues);
        let home_team = self.required_text("homeTeam", request.home_team.as_deref(), &mut issues);
        let away_team = self.required_text("awayTeam", request.away_team.as_deref(), &mut issues);
        let home_score = self.score_or_default("homeScore", request.home_score, &mut issues);
        let away_score = self.score_or_default("awayScore", request.away_score, &mut issues);

        if request.start_time.is_none() {
            issues.push(ValidationIssue::new("startTime", "startTime is required"));
        }
        if request.end_time.is_none() {
            issues.push(ValidationIssue::new("endTime", "endTime is required"));
        }
        if let (Some(start_time), Some(end_time)) = (request.start_time, request.end_time) {
            if end_time <= start_time {
                issues.push(ValidationIssue::new(
                    "endTime",
                    "endTime must be chronologically after startTime",
                ));
            }
        }

        match (
            sport,
            home_team,
            away_team,
            request.start_time,
            request.end_time,
        ) {
            (Some(sport), Some(home_team), Some(away_team), Some(start_time), Some(end_time))
                if issues.is_empty() =>
            {
                Ok(NewMatch {
                    sport,
                    home_team,
                    away_team,
                    start_time,
                    end_time,
                    home_score,
                    away_score,
                })
            }
            _ => Err(issues),
        }
    }

    /// Validate a score-update body. Both fields are required.
    pub fn validate_update_score(
        &self,
        request: &UpdateScoreRequest,
    ) -> Result<(i32, i32), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let home_score = self.required_score("homeScore", request.home_score, &mut issues);
        let away_score = self.required_score("awayScore", request.away_score, &mut issues);

        match (home_score, away_score) {
            (Some(home_score), Some(away_score)) if issues.is_empty() => {
                Ok((home_score, away_score))
            }
            _ => Err(issues),
        }
    }

    /// Validate the list-query limit. Absent means the default; values
    /// outside [1, MAX_LIMIT] are rejected.
    pub fn validate_list_limit(&self, limit: Option<i64>) -> Result<i64, Vec<ValidationIssue>> {
        match limit {
            None => Ok(DEFAULT_LIMIT),
            Some(value) if value < 1 => Err(vec![ValidationIssue::new(
                "limit",
                "limit must be a positive integer",
            )]),
            Some(value) if value > MAX_LIMIT => Err(vec![ValidationIssue::new(
                "limit",
                format!("limit must not exceed {}", MAX_LIMIT),
            )]),
            Some(value) => Ok(value),
        }
    }

    fn required_text(
        &self,
        field: &str,
        value: Option<&str>,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<String> {
        let raw = match value {
            Some(raw) => raw,
            None => {
                issues.push(ValidationIssue::new(field, format!("{} is required", field)));
                return None;
            }
        };

        let sanitized = self.sanitize_text(raw);
        if sanitized.is_empty() {
            issues.push(ValidationIssue::new(
                field,
                format!("{} must not be empty", field),
            ));
            return None;
        }

        Some(sanitized)
    }

    fn score_or_default(
        &self,
        field: &str,
        value: Option<i32>,
        issues: &mut Vec<ValidationIssue>,
    ) -> i32 {
        match value {
            None => 0,
            Some(score) if score < 0 => {
                issues.push(ValidationIssue::new(
                    field,
                    format!("{} must be a non-negative integer", field),
                ));
                0
            }
            Some(score) => score,
        }
    }

    fn required_score(
        &self,
        field: &str,
        value: Option<i32>,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<i32> {
        match value {
            None => {
                issues.push(ValidationIssue::new(field, format!("{} is required", field)));
                None
            }
            Some(score) if score < 0 => {
                issues.push(ValidationIssue::new(
                    field,
                    format!("{} must be a non-negative integer", field),
                ));
                None
            }
            Some(score) => Some(score),
        }
    }

    /// Trim surrounding whitespace and strip null bytes.
    fn sanitize_text(&self, input: &str) -> String {
        input
            .trim()
            .chars()
            .filter(|&c| c != '\0')
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}
