#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_plain;

mod cli;
mod error;
mod input;
mod layout;
mod memory;
mod types;

fn main() {
    std::process::exit(cli::main());
}
