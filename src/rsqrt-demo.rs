#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

mod cpu;

use rsqrt::debug::Console;

pub fn main() {
    rsqrt::demo::run(&mut Console);
}
