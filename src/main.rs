use miette::Result;

/// Main entry point for the ferris-loops CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    ferris_loops::run()
}
