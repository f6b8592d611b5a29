use std::path::Path;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: atomiq <atom-list-file>");
    let structure = atomiq::read_structure(Path::new(&path)).unwrap();
    println!("{} atoms", structure.size());
    for atom in &structure.atoms {
        println!("{atom}");
    }
}
