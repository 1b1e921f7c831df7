use serde::Serialize;

use crate::error::AppError;

/// Pretty-print any serializable value to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
