use unroll::for_each;

macro_rules! unit_struct {
    ($name:ident) => {
        pub struct $name;
    };
}

macro_rules! name_method {
    ($name:ident) => {
        pub fn $name(&self) -> &'static str {
            stringify!($name)
        }
    };
}

macro_rules! double {
    ($x:expr) => {
        $x * 2
    };
}

for_each!(unit_struct, Alpha, Beta);

pub struct Table;

impl Table {
    for_each!(name_method, open, close);
}

fn main() {
    let _ = (Alpha, Beta);
    assert_eq!(Table.open(), "open");
    assert_eq!(Table.close(), "close");

    let value = for_each!(double, 21);
    assert_eq!(value, 42);

    for_each!(std::stringify);
}
