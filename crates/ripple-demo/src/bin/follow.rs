use anyhow::Result;
use ripple_demo::RippleApp;
use ripple_engine::device::GlInit;
use ripple_engine::logging::{init_logging, LoggingConfig};
use ripple_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default().with_title("GL test (follow)");
    Runtime::run(config, GlInit::default(), RippleApp::follow())
}
