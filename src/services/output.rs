use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print `data` wrapped in the `{ok, data}` envelope all `--json` output
/// shares.
pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// One-row reports: the envelope under `--json`, a single text line
/// otherwise.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(data)
    } else {
        println!("{}", row(&data));
        Ok(())
    }
}
