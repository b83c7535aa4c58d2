/// Fixture loader for round-trip cases
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A parse/build case
    UrlCase {
        input: String,
        href: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<Vec<String>>,
        #[serde(default)]
        query: Option<Vec<(String, String)>>,
        #[serde(default)]
        fragment: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn check(&mut self, case_num: usize, input: &str, field: &str, expected: &str, actual: &str) {
        if expected == actual {
            return;
        }
        self.failures.push(CaseFailure {
            case_num,
            input: input.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load test cases from a JSON fixture string
pub fn load_cases(json: &str) -> Result<Vec<TestCase>, serde_json::Error> {
    serde_json::from_str(json)
}

pub const ROUND_TRIP_FIXTURE: &str = include_str!("../fixtures/round_trip.json");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_round_trip_fixture() {
        let cases = load_cases(ROUND_TRIP_FIXTURE).unwrap();
        let url_cases = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlCase { .. }))
            .count();
        assert!(url_cases >= 10);
    }

    #[test]
    fn test_check_records_mismatch() {
        let mut result = CaseResult::default();
        result.check(1, "in", "href", "a", "a");
        assert!(result.is_success());
        result.check(2, "in", "href", "a", "b");
        assert_eq!(result.failures.len(), 1);
    }
}
