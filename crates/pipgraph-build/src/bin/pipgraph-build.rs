use std::process::ExitCode;

use pipgraph_build::main as pipgraph_build_main;

fn main() -> ExitCode {
    pipgraph_build_main(std::env::args_os())
}
