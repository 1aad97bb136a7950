use std::io::Cursor;

use tracing::Level;

use lms::config::Config;
use lms::shell::Shell;
use lms::system::LeaveSystem;

fn test_config() -> Config {
    Config {
        log_dir: "logs".to_string(),
        log_level: Level::INFO,
        date_format: "%Y-%m-%d".to_string(),
    }
}

fn run_session(script: &str) -> String {
    let mut system = LeaveSystem::new();
    let mut output = Vec::new();
    let config = test_config();
    let mut shell = Shell::new(Cursor::new(script.as_bytes()), &mut output, &config);
    shell.run(&mut system).expect("session failed");
    String::from_utf8(output).expect("shell output is utf-8")
}

#[test]
fn full_session_add_request_approve_history() {
    // every operation is followed by the blank "Press Enter" line
    let script = "\
1
1
Alice
10

2
1
annual
2026-03-02
2026-03-06

3
1

4
1

3
1

5
";
    let output = run_session(script);

    assert!(output.contains("Employee added successfully."));
    assert!(output.contains("Leave request 1 submitted successfully."));
    assert!(output.contains("Leave History for Employee 1 (Alice):"));
    assert!(output.contains("Leave Balance: 5"));
    assert!(output.contains("Leave request with ID 1 approved by Manager."));
    assert!(output.contains(
        "[1] annual: Start Date: 2026-03-02, End Date: 2026-03-06, Status: pending"
    ));
    assert!(output.contains(
        "[1] annual: Start Date: 2026-03-02, End Date: 2026-03-06, Status: approved"
    ));

    // the pending line is printed before the approval, the approved one after
    let pending_at = output.find("Status: pending").unwrap();
    let approved_at = output.find("Status: approved").unwrap();
    assert!(pending_at < approved_at);
}

#[test]
fn second_approval_reports_not_found_or_already_approved() {
    let script = "\
1
1
Alice
10

2
1
sick
2026-03-02
2026-03-02

4
1

4
1

5
";
    let output = run_session(script);
    assert!(output.contains("Leave request with ID 1 approved by Manager."));
    assert!(output.contains(
        "Unable to approve leave request with ID 1. Request not found or already approved."
    ));
}

#[test]
fn unknown_employee_paths_report_not_found() {
    let script = "\
2
42
annual
2026-03-02
2026-03-02

3
42

5
";
    let output = run_session(script);
    assert_eq!(output.matches("Employee not found.").count(), 2);
}

#[test]
fn insufficient_balance_is_reported_and_nothing_recorded() {
    let script = "\
1
1
Alice
3

2
1
annual
2026-03-02
2026-03-06

3
1

5
";
    let output = run_session(script);
    assert!(output.contains("Insufficient leave balance. Leave request not submitted."));
    assert!(output.contains("Leave Balance: 3"));
    assert!(!output.contains("Status:"));
}

#[test]
fn malformed_menu_and_field_input_is_handled_in_the_shell() {
    let script = "\
x

9

2
1
annual
not-a-date

5
";
    let output = run_session(script);
    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Invalid choice. Try again."));
    assert!(output.contains("Invalid date: not-a-date (expected format %Y-%m-%d)"));
}
