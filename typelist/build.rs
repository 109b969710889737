use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests checking the algebraic laws of the combinators over every
    // combination of small counts. An impl which is wrong at one particular count, or only on
    // finite inputs, will show up here long before it does in anyone's program.

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("laws.rs");
    let mut f = File::create(&dest_path)?;

    let infinite = [Seq::Nats, Seq::Fib, Seq::Cycle(3)];
    let finite = [Seq::Finite(0), Seq::Finite(3), Seq::Finite(7)];

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    // Take<n, Take<m, s>> = Take<min(n, m), s>
    writeln!(f, "#[test]")?;
    writeln!(f, "fn take_of_take_is_take_of_min() {{")?;
    for s in infinite.iter().chain(finite.iter()) {
        for n in 0..=MAX_COUNT {
            for m in 0..=MAX_COUNT {
                let lhs = s.clone().take(m).take(n);
                let rhs = s.clone().take(n.min(m));
                assert_types_eq(&mut f, tuple(&lhs), tuple(&rhs))?;
            }
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    // Drop<n, Drop<m, s>> = Drop<n + m, s>, compared on a finite window when s is infinite
    writeln!(f, "#[test]")?;
    writeln!(f, "fn drop_of_drop_is_drop_of_sum() {{")?;
    for s in infinite.iter().filter(|s| **s != Seq::Fib) {
        for n in 0..=MAX_COUNT {
            for m in 0..=MAX_COUNT {
                let lhs = s.clone().drop(m).drop(n).take(WINDOW);
                let rhs = s.clone().drop(n + m).take(WINDOW);
                assert_types_eq(&mut f, tuple(&lhs), tuple(&rhs))?;
            }
        }
    }
    for s in finite.iter() {
        for n in 0..=MAX_COUNT {
            for m in 0..=MAX_COUNT {
                let lhs = s.clone().drop(m).drop(n);
                let rhs = s.clone().drop(n + m);
                assert_types_eq(&mut f, tuple(&lhs), tuple(&rhs))?;
            }
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    // Append<Take<n, l>, Drop<n, l>> = l
    writeln!(f, "#[test]")?;
    writeln!(f, "fn take_and_drop_split_a_sequence() {{")?;
    for s in finite.iter() {
        for n in 0..=MAX_COUNT {
            let split = format!("Append<{}, {}>", s.clone().take(n), s.clone().drop(n));
            assert_types_eq(&mut f, tuple(&split), tuple(s))?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    // Map<Id, s> = s, and Length<Take<n, s>> = n for every infinite s
    writeln!(f, "#[test]")?;
    writeln!(f, "fn identity_map_and_length_of_take() {{")?;
    for s in infinite.iter() {
        for n in 0..=MAX_COUNT {
            let mapped = s.clone().map_id().take(n);
            let prefix = s.clone().take(n);
            assert_types_eq(&mut f, tuple(&mapped), tuple(&prefix))?;
            let length = format!("Length<{}>", prefix);
            assert_types_eq(&mut f, length, format!("UnaryOf<{}>", n))?;
        }
    }
    writeln!(f, "}}")?;
    Ok(())
}

/// Write one line of a generated test asserting that two types are equal.
fn assert_types_eq(f: &mut File, lhs: impl Display, rhs: impl Display) -> io::Result<()> {
    writeln!(f, "    assert_type_eq_all!({}, {});", lhs, rhs)
}

/// The flat tuple a finite sequence evaluates to.
fn tuple(s: &impl Display) -> String {
    format!("ToTuple<{}>", s)
}

/// The largest count enumerated for `Take` and `Drop`.
const MAX_COUNT: u8 = 5;

/// How many elements of an infinite sequence are compared after dropping from it.
const WINDOW: u8 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seq {
    Nats,
    Fib,
    /// A cycle through this many distinct marker types.
    Cycle(u8),
    /// A finite sequence of this many consecutive naturals.
    Finite(u8),
    Take(u8, Box<Seq>),
    Drop(u8, Box<Seq>),
    MapId(Box<Seq>),
}

impl Seq {
    fn take(self, n: u8) -> Seq {
        Seq::Take(n, Box::new(self))
    }

    fn drop(self, n: u8) -> Seq {
        Seq::Drop(n, Box::new(self))
    }

    fn map_id(self) -> Seq {
        Seq::MapId(Box::new(self))
    }
}

impl Display for Seq {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        use Seq::*;
        match self {
            Nats => write!(f, "Nats")?,
            Fib => write!(f, "Fib")?,
            Cycle(k) => {
                write!(f, "Cycle<FromTuple<(")?;
                for i in 0..*k {
                    write!(f, "[u8; {}], ", i)?;
                }
                write!(f, ")>>")?;
            }
            Finite(k) => write!(f, "Take<UnaryOf<{}>, Nats>", k)?,
            Take(n, s) => write!(f, "Take<UnaryOf<{}>, {}>", n, s)?,
            Drop(n, s) => write!(f, "crate::Drop<UnaryOf<{}>, {}>", n, s)?,
            MapId(s) => write!(f, "Map<Id, {}>", s)?,
        }
        Ok(())
    }
}
