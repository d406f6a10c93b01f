//! A register file wider than the default `for_each!` ceiling.
//!
//! `unroll.toml` in this crate sets `max_elements = 100`, and `build.rs`
//! tells cargo to rebuild when it changes.

use unroll::{count, for_each};

macro_rules! register {
    ($name:ident) => {
        pub const $name: &str = stringify!($name);
    };
}

/// Number of registers.
pub const REGISTER_COUNT: usize = count!(
    R0, R1, R2, R3, R4, R5, R6, R7, R8, R9,
    R10, R11, R12, R13, R14, R15, R16, R17, R18, R19,
    R20, R21, R22, R23, R24, R25, R26, R27, R28, R29,
    R30, R31, R32, R33, R34, R35, R36, R37, R38, R39,
    R40, R41, R42, R43, R44, R45, R46, R47, R48, R49,
    R50, R51, R52, R53, R54, R55, R56, R57, R58, R59,
    R60, R61, R62, R63, R64, R65, R66, R67, R68, R69,
    R70, R71, R72, R73, R74, R75, R76, R77, R78, R79,
);

pub mod registers {
    use unroll::for_each;

    for_each!(
        register,
        R0, R1, R2, R3, R4, R5, R6, R7, R8, R9,
        R10, R11, R12, R13, R14, R15, R16, R17, R18, R19,
        R20, R21, R22, R23, R24, R25, R26, R27, R28, R29,
        R30, R31, R32, R33, R34, R35, R36, R37, R38, R39,
        R40, R41, R42, R43, R44, R45, R46, R47, R48, R49,
        R50, R51, R52, R53, R54, R55, R56, R57, R58, R59,
        R60, R61, R62, R63, R64, R65, R66, R67, R68, R69,
        R70, R71, R72, R73, R74, R75, R76, R77, R78, R79,
    );
}

/// Register names in declaration order.
pub fn register_names() -> Vec<&'static str> {
    let mut names = Vec::with_capacity(REGISTER_COUNT);
    macro_rules! push {
        ($name:ident) => {
            names.push(registers::$name);
        };
    }
    for_each!(
        push,
        R0, R1, R2, R3, R4, R5, R6, R7, R8, R9,
        R10, R11, R12, R13, R14, R15, R16, R17, R18, R19,
        R20, R21, R22, R23, R24, R25, R26, R27, R28, R29,
        R30, R31, R32, R33, R34, R35, R36, R37, R38, R39,
        R40, R41, R42, R43, R44, R45, R46, R47, R48, R49,
        R50, R51, R52, R53, R54, R55, R56, R57, R58, R59,
        R60, R61, R62, R63, R64, R65, R66, R67, R68, R69,
        R70, R71, R72, R73, R74, R75, R76, R77, R78, R79,
    );
    names
}
