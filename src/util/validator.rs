use std::borrow::Cow;

use error_stack::Report;
use thiserror::Error;
use validator::ValidateError;

#[derive(Debug, Error)]
#[error("Invalid values given")]
pub struct InvalidValues;

// Flattens a ValidateError tree into dotted-path printables so a
// rejected policy reads like `register.secret_min: <message>`.
pub trait IntoValidatorReport<T> {
  fn into_validator_report(self) -> error_stack::Result<T, InvalidValues>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidateError> {
  fn into_validator_report(self) -> error_stack::Result<T, InvalidValues> {
    self.map_err(|error| {
      fn read_errors<'a>(
        err: &'a ValidateError,
        fields_queue: &mut Vec<Cow<'a, str>>,
        mut report: Report<InvalidValues>,
      ) -> Report<InvalidValues> {
        match err {
          ValidateError::Fields(fields) => {
            for (field, data) in fields {
              fields_queue.push(Cow::Borrowed(field));
              report = read_errors(data, fields_queue, report);
              fields_queue.pop();
            }
            report
          },
          ValidateError::Messages(messages) => {
            let field_str = fields_queue.join(".");
            for message in messages {
              report = report.attach_printable(format!("{field_str}: {message}"));
            }
            report
          },
        }
      }

      let mut queue = Vec::new();
      read_errors(&error, &mut queue, Report::new(InvalidValues))
    })
  }
}
