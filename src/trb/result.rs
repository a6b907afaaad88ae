/// Crate-wide result, with `anyhow` carrying any of the typed errors
pub type Result<T = ()> = anyhow::Result<T>;
