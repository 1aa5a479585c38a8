//! Tabulates functions over a grid of orders and arguments

use std::io::Write;

use sphbessel::{Function, SphericalBessel, ModifiedSphericalBessel};

mod error;
pub use error::*;

/// Both families of a single order, built once and reused for
/// every argument in the table
struct Entry {
    order: usize,
    plain: SphericalBessel,
    modified: ModifiedSphericalBessel,
}

/// A table of function values, one row for each (order, x)
/// pair, one column for each requested function.
pub struct Table {
    functions: Vec<Function>,
    entries: Vec<Entry>,
    xs: Vec<f64>,
    precision: usize,
}

impl Table {
    /// Prepares the table, failing if any of the function names
    /// are not recognized or any of the orders is out of range.
    /// Nothing is evaluated until the table is written.
    pub fn new<S: AsRef<str>>(functions: &[S], orders: &[usize], xs: &[f64], precision: usize) -> Result<Self, OutputError> {
        let functions = functions.iter()
            .map(|s| s.as_ref().parse::<Function>())
            .collect::<Result<Vec<_>, _>>()?;

        if functions.is_empty() {
            return Err(OutputError::conversion("", "list of functions"));
        }

        let entries = orders.iter()
            .map(|&n| -> Result<Entry, OutputError> {
                Ok(Entry {
                    order: n,
                    plain: SphericalBessel::of_order(n)?,
                    modified: ModifiedSphericalBessel::of_order(n)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table {
            functions,
            entries,
            xs: xs.to_vec(),
            precision,
        })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.entries.len() * self.xs.len()
    }

    /// Writes the header and all rows to `out`, in the form
    /// `order x f1 f2 ...`. `name` identifies the destination
    /// in any error message.
    pub fn write<W: Write>(&self, out: &mut W, name: &str) -> Result<(), OutputError> {
        let err = |_| OutputError::Write(name.to_owned());
        // digits after the decimal point, x and f alike
        let digits = self.precision.saturating_sub(1);

        let header: Vec<String> = self.functions.iter()
            .map(|f| f.to_string())
            .collect();
        writeln!(out, "# order x {}", header.join(" ")).map_err(err)?;

        for entry in self.entries.iter() {
            for &x in self.xs.iter() {
                let values: Vec<String> = self.functions.iter()
                    .map(|f| f.apply(&entry.plain, &entry.modified, x))
                    .map(|v| format!("{:.*e}", digits, v))
                    .collect();
                writeln!(out, "{} {:.*e} {}", entry.order, digits, x, values.join(" ")).map_err(err)?;
            }
        }

        out.flush().map_err(err)
    }
}
