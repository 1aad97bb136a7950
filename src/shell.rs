use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::config::Config;
use crate::error::LeaveError;
use crate::model::id::{EmployeeId, RequestId};
use crate::model::leave_request::LeaveType;
use crate::system::LeaveSystem;

/// Interactive text menu over a [`LeaveSystem`]. Generic over its streams
/// so a whole session can be scripted from a test.
///
/// All parsing happens here; the registry only ever sees well-typed
/// arguments. A field that fails to parse aborts the current operation
/// back to the menu. End of input behaves like choosing Exit.
pub struct Shell<R, W> {
    input: R,
    output: W,
    date_format: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            date_format: config.date_format.clone(),
        }
    }

    /// Runs the menu loop until Exit is chosen or the input ends.
    pub fn run(&mut self, system: &mut LeaveSystem) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match line.trim().parse::<u32>() {
                Ok(1) => self.add_employee(system)?,
                Ok(2) => self.request_leave(system)?,
                Ok(3) => self.display_history(system)?,
                Ok(4) => self.approve_leave(system)?,
                Ok(5) => return Ok(()),
                Ok(_) => writeln!(self.output, "Invalid choice. Try again.")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
            writeln!(self.output)?;
            writeln!(self.output, "Press Enter to continue...")?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    fn add_employee(&mut self, system: &mut LeaveSystem) -> io::Result<()> {
        let Some(id) = self.prompt_parse::<u64>("Enter Employee Id: ", "employee id")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter Employee Name: ")? else {
            return Ok(());
        };
        let Some(balance) = self.prompt_parse::<i64>("Enter Leave Balance: ", "leave balance")?
        else {
            return Ok(());
        };

        match system.add_employee(EmployeeId::from(id), name.trim().to_string(), balance) {
            Ok(()) => writeln!(self.output, "Employee added successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn request_leave(&mut self, system: &mut LeaveSystem) -> io::Result<()> {
        let Some(id) = self.prompt_parse::<u64>("Enter Employee Id: ", "employee id")? else {
            return Ok(());
        };
        let Some(leave_type) =
            self.prompt_parse::<LeaveType>("Enter Leave Type (annual/sick/unpaid): ", "leave type")?
        else {
            return Ok(());
        };
        let Some(start_date) = self.prompt_date("Enter Start Date")? else {
            return Ok(());
        };
        let Some(end_date) = self.prompt_date("Enter End Date")? else {
            return Ok(());
        };

        match system.request_leave(EmployeeId::from(id), leave_type, start_date, end_date) {
            Ok(request_id) => writeln!(
                self.output,
                "Leave request {request_id} submitted successfully."
            ),
            Err(err) => self.report(&err),
        }
    }

    fn display_history(&mut self, system: &mut LeaveSystem) -> io::Result<()> {
        let Some(id) = self.prompt_parse::<u64>("Enter Employee Id: ", "employee id")? else {
            return Ok(());
        };

        match system.leave_history(EmployeeId::from(id)) {
            Ok(history) => {
                writeln!(
                    self.output,
                    "Leave History for Employee {} ({}):",
                    history.employee_id, history.name
                )?;
                writeln!(self.output, "Leave Balance: {}", history.leave_balance)?;
                writeln!(self.output, "Leave Requests:")?;
                for request in &history.requests {
                    writeln!(
                        self.output,
                        "  [{}] {}: Start Date: {}, End Date: {}, Status: {}",
                        request.id,
                        request.leave_type,
                        request.start_date.format(&self.date_format),
                        request.end_date.format(&self.date_format),
                        request.status
                    )?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn approve_leave(&mut self, system: &mut LeaveSystem) -> io::Result<()> {
        let Some(id) =
            self.prompt_parse::<u64>("Enter Leave Request ID to Approve: ", "request id")?
        else {
            return Ok(());
        };

        match system.approve_leave(RequestId::from(id)) {
            Ok(approved_by) => {
                for name in &approved_by {
                    writeln!(
                        self.output,
                        "Leave request with ID {id} approved by {name}."
                    )?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    /// Failure reasons rendered the way the console flavor always worded
    /// them. Request lookup failures deliberately share one line so the
    /// caller cannot distinguish a guessable id from a processed one.
    fn report(&mut self, err: &LeaveError) -> io::Result<()> {
        match err {
            LeaveError::EmployeeNotFound(_) => writeln!(self.output, "Employee not found."),
            LeaveError::EmployeeExists(id) => {
                writeln!(self.output, "Employee with ID {id} already exists.")
            }
            LeaveError::InsufficientBalance { .. } => writeln!(
                self.output,
                "Insufficient leave balance. Leave request not submitted."
            ),
            LeaveError::EndBeforeStart { .. } => writeln!(
                self.output,
                "End date is before start date. Leave request not submitted."
            ),
            LeaveError::RequestNotFound(id) | LeaveError::AlreadyApproved(id) => writeln!(
                self.output,
                "Unable to approve leave request with ID {id}. Request not found or already approved."
            ),
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Leave Management System")?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. Request Leave")?;
        writeln!(self.output, "3. Display Leave History")?;
        writeln!(self.output, "4. Approve Leave")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_parse<T: FromStr>(&mut self, label: &str, field: &str) -> io::Result<Option<T>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid {field}: {}", line.trim())?;
                Ok(None)
            }
        }
    }

    fn prompt_date(&mut self, label: &str) -> io::Result<Option<NaiveDate>> {
        let Some(line) = self.prompt(&format!("{label} ({}): ", self.date_format))? else {
            return Ok(None);
        };
        let text = line.trim();
        match NaiveDate::parse_from_str(text, &self.date_format) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid date: {text} (expected format {})",
                    self.date_format
                )?;
                Ok(None)
            }
        }
    }

    /// `None` means the input stream is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
