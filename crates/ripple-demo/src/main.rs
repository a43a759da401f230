use anyhow::Result;
use ripple_demo::RippleApp;
use ripple_engine::device::GlInit;
use ripple_engine::logging::{init_logging, LoggingConfig};
use ripple_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run(RuntimeConfig::default(), GlInit::default(), RippleApp::rings())
}
