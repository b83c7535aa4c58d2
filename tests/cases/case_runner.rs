use super::case_loader::{CaseResult, ROUND_TRIP_FIXTURE, TestCase, load_cases};
/// Round-trip case runner
///
/// Runs fixture cases against `UrlValue`
use urlvalue::UrlValue;

fn opt(value: Option<&str>) -> String {
    value.map_or_else(|| "<none>".to_string(), str::to_string)
}

/// Run cases and collect mismatches
pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for case in cases {
        let TestCase::UrlCase {
            input,
            href,
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let url = UrlValue::parse(&input);

        let built = url.build_url();
        result.check(case_num, &input, "href", &href, &built);

        if let Some(expected) = scheme {
            result.check(case_num, &input, "scheme", &expected, &opt(url.scheme()));
        }
        if let Some(expected) = username {
            result.check(case_num, &input, "username", &expected, &opt(url.username()));
        }
        if let Some(expected) = password {
            result.check(case_num, &input, "password", &expected, &opt(url.password()));
        }
        if let Some(expected) = host {
            result.check(case_num, &input, "host", &expected, url.host());
        }
        if let Some(expected) = port {
            result.check(case_num, &input, "port", &expected, &opt(url.port()));
        }
        if let Some(expected) = path {
            let actual: Vec<&str> = url.path().iter().collect();
            result.check(
                case_num,
                &input,
                "path",
                &format!("{expected:?}"),
                &format!("{actual:?}"),
            );
        }
        if let Some(expected) = query {
            let actual: Vec<(&str, &str)> = url.query_params().iter().collect();
            result.check(
                case_num,
                &input,
                "query",
                &format!("{expected:?}"),
                &format!("{actual:?}"),
            );
        }
        if let Some(expected) = fragment {
            result.check(case_num, &input, "fragment", &expected, &opt(url.fragment()));
        }

        // Rebuilding from the output must be a fixed point.
        let reparsed = UrlValue::parse(&built);
        result.check(case_num, &input, "reparse", &built, &reparsed.build_url());

        if result.failures.last().is_none_or(|f| f.case_num != case_num) {
            result.passed += 1;
        }
    }

    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_fixture() {
        let cases = load_cases(ROUND_TRIP_FIXTURE).unwrap();
        let result = run_cases(cases);
        if !result.is_success() {
            for failure in &result.failures {
                eprintln!("{failure:?}");
            }
            panic!(
                "{} round-trip case checks failed ({} passed)",
                result.failures.len(),
                result.passed
            );
        }
        assert!(result.passed >= 10);
    }
}
