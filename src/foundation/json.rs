use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::foundation::error::{MotionError, MotionResult};

/// Parse a JSON document of type `T`; `what` names the document in error messages.
pub(crate) fn read_json<T, R>(r: R, what: &str) -> MotionResult<T>
where
    T: DeserializeOwned,
    R: std::io::Read,
{
    serde_json::from_reader(r).map_err(|e| MotionError::config(format!("parse {what} JSON: {e}")))
}

#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub(crate) fn read_json_file<T>(path: impl AsRef<Path>, what: &str) -> MotionResult<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|e| MotionError::config(format!("open {what} JSON '{}': {e}", path.display())))?;
    read_json(BufReader::new(f), what)
}
