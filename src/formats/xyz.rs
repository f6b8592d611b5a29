use crate::atom::Atom;
use crate::error::QError;
use crate::format::FileFormat;
use crate::structure::Structure;
use crate::unit_cell::UnitCell;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

pub struct XyzFormat;

/// Extract the quoted payload of a `Lattice="..."` token from an
/// extended-XYZ comment line.
fn lattice_payload(comment: &str) -> Option<&str> {
    let start = comment.find("Lattice=\"")? + "Lattice=\"".len();
    let end = comment[start..].find('"')? + start;
    Some(&comment[start..end])
}

impl XyzFormat {
    fn parse_atom_line(line: &str) -> Result<Atom, QError> {
        let mut tokens = line.split_whitespace();
        let element = tokens
            .next()
            .ok_or_else(|| QError::GenericError("missing element symbol in atom line".to_string()))?;
        let x = tokens.next().unwrap_or("0");
        let y = tokens.next().unwrap_or("0");
        let z = tokens.next().unwrap_or("0");
        Ok(Atom::from_fields(element, x, y, z, "0"))
    }
}

impl FileFormat for XyzFormat {
    fn read(&self, reader: &mut BufReader<File>) -> Result<Structure, QError> {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let n_atoms = line.trim().parse::<usize>().map_err(|e| {
            QError::GenericError(format!("invalid atom count '{}': {e}", line.trim()))
        })?;

        line.clear();
        reader.read_line(&mut line)?;
        let unit_cell = match lattice_payload(&line) {
            Some(payload) => UnitCell::parse(payload)?,
            None => UnitCell::new(),
        };

        let mut structure = Structure {
            unit_cell,
            atoms: Vec::with_capacity(n_atoms),
        };
        for i in 0..n_atoms {
            line.clear();
            let bytes = reader.read_line(&mut line)?;
            if bytes == 0 {
                return Err(QError::UnexpectedEof {
                    format: "XYZ".to_string(),
                    expected: n_atoms,
                    got: i,
                });
            }
            structure.add_atom(Self::parse_atom_line(&line)?);
        }
        Ok(structure)
    }

    fn write(&self, writer: &mut BufWriter<File>, structure: &Structure) -> Result<(), QError> {
        writeln!(writer, "{}", structure.size())?;

        if structure.unit_cell.is_zero() {
            writeln!(writer)?;
        } else {
            let lattice = structure
                .unit_cell
                .vectors()
                .iter()
                .flatten()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "Lattice=\"{lattice}\"")?;
        }

        for atom in &structure.atoms {
            writeln!(writer, "{}", atom.xyz_line())?;
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

    fn reader_over(content: &str) -> (tempfile::NamedTempFile, BufReader<File>) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.rewind().unwrap();
        let reader = BufReader::new(file.reopen().unwrap());
        (file, reader)
    }

    #[test]
    fn read_plain_xyz() {
        let content = "3\nwater\nO 0.0 0.0 0.117\nH 0.757 0.0 -0.468\nH -0.757 0.0 -0.468\n";
        let (_file, mut reader) = reader_over(content);
        let structure = XyzFormat.read(&mut reader).unwrap();

        assert_eq!(structure.size(), 3);
        assert_eq!(structure[0].element, "O");
        assert_approx_eq!(structure[2].x, -0.757);
        assert!(structure.unit_cell.is_zero());
    }

    #[test]
    fn read_extended_xyz_lattice() {
        let content = "1\nLattice=\"2.0 0.0 0.0 0.0 3.0 0.0 0.0 0.0 4.0\"\nC 0.5 0.5 0.5\n";
        let (_file, mut reader) = reader_over(content);
        let structure = XyzFormat.read(&mut reader).unwrap();

        assert_eq!(
            structure.unit_cell.vectors(),
            [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]
        );
    }

    #[test]
    fn read_truncated_body() {
        let content = "3\ncomment\nO 0.0 0.0 0.117\n";
        let (_file, mut reader) = reader_over(content);
        let err = XyzFormat.read(&mut reader).unwrap_err();
        assert!(matches!(err, QError::UnexpectedEof { .. }));
    }

    #[test]
    fn read_bad_count_line() {
        let content = "many\ncomment\n";
        let (_file, mut reader) = reader_over(content);
        assert!(XyzFormat.read(&mut reader).is_err());
    }

    #[test]
    fn bad_coordinate_field_keeps_default() {
        let content = "1\ncomment\nC 1.0 oops 3.0\n";
        let (_file, mut reader) = reader_over(content);
        let structure = XyzFormat.read(&mut reader).unwrap();
        assert_approx_eq!(structure[0].x, 1.0);
        assert_approx_eq!(structure[0].y, 0.0);
        assert_approx_eq!(structure[0].z, 3.0);
    }
}
