use crate::config::Config;
use crate::output::emit;
use schemars::schema_for;

/// Print the JSON Schema of `explorateur.yaml`
pub fn execute() -> anyhow::Result<()> {
    let schema = schema_for!(Config);
    emit(&serde_json::to_string_pretty(&schema)?, None)?;
    Ok(())
}
