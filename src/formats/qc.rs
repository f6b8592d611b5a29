use crate::atom::Atom;
use crate::error::QError;
use crate::format::FileFormat;
use crate::structure::Structure;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// The charge-annotated atom list: one fixed-width `elem x y z q` line per
/// atom, no header. Blank lines are skipped on read.
pub struct QcFormat;

impl FileFormat for QcFormat {
    fn read(&self, reader: &mut BufReader<File>) -> Result<Structure, QError> {
        let mut structure = Structure::new();
        for line in reader.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            let Some(element) = tokens.next() else {
                continue;
            };
            let x = tokens.next().unwrap_or("0");
            let y = tokens.next().unwrap_or("0");
            let z = tokens.next().unwrap_or("0");
            let charge = tokens.next().unwrap_or("0");
            structure.add_atom(Atom::from_fields(element, x, y, z, charge));
        }
        Ok(structure)
    }

    fn write(&self, writer: &mut BufWriter<File>, structure: &Structure) -> Result<(), QError> {
        for atom in &structure.atoms {
            writeln!(writer, "{atom}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::io::{Seek, Write};

    #[test]
    fn read_skips_blank_lines() {
        let content = "     C   0.000000   0.000000   0.000000   0.450000\n\n     O   0.000000   1.210000   0.000000  -0.450000\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.rewind().unwrap();
        let mut reader = BufReader::new(file.reopen().unwrap());

        let structure = QcFormat.read(&mut reader).unwrap();
        assert_eq!(structure.size(), 2);
        assert_approx_eq!(structure[0].charge, 0.45);
        assert_approx_eq!(structure[1].y, 1.21);
    }
}
