use std::env;
use std::sync::Arc;

use color_cafe::{Result, SystemClipboard, app, init_logger};

#[tokio::main]
async fn main() -> Result<()> {
    if let Ok(path) = env::var("COLOR_CAFE_LOG") {
        init_logger(&path)?;
    }

    app::run(Arc::new(SystemClipboard)).await
}
