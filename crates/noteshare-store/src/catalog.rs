//! Fixed lookup catalogs of notes and students.

use noteshare_core::{Note, NoteId, Student, StudentId, StudentRef};

/// Immutable catalog of notes and students, seeded at construction.
///
/// Pure lookup: absence is `None`, never an error, and nothing mutates the
/// catalog after it is built. Listings preserve insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    notes: Vec<Note>,
    students: Vec<Student>,
}

impl Catalog {
    /// Build a catalog from pre-seeded notes and students.
    #[must_use]
    pub fn new(notes: Vec<Note>, students: Vec<Student>) -> Self {
        Self { notes, students }
    }

    /// The demo catalog the service ships with.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(
            vec![
                Note {
                    id: NoteId(1),
                    title: "AWS Questions".to_string(),
                    description: "Collection of AWS interview questions".to_string(),
                    owner: "admin".to_string(),
                },
                Note {
                    id: NoteId(2),
                    title: "Node.js Notes".to_string(),
                    description: "Useful Node.js patterns".to_string(),
                    owner: "admin".to_string(),
                },
            ],
            vec![
                Student { id: StudentId(1), name: "alice".to_string() },
                Student { id: StudentId(2), name: "bob".to_string() },
                Student { id: StudentId(3), name: "charlie".to_string() },
            ],
        )
    }

    /// Look up a note by id.
    #[must_use]
    pub fn find_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Dual-mode student lookup: a name matches only by exact name equality,
    /// a numeric id only by id equality.
    #[must_use]
    pub fn find_student(&self, student: &StudentRef) -> Option<&Student> {
        self.students.iter().find(|candidate| match student {
            StudentRef::Name(name) => candidate.name == *name,
            StudentRef::Id(id) => candidate.id.get() == *id,
        })
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// All students in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_note_by_id() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.find_note(NoteId(1)).unwrap().title, "AWS Questions");
        assert!(catalog.find_note(NoteId(99)).is_none());
    }

    #[test]
    fn find_student_by_name() {
        let catalog = Catalog::sample();
        let bob = catalog.find_student(&"bob".into()).unwrap();
        assert_eq!(bob.id, StudentId(2));
        assert!(catalog.find_student(&"eve".into()).is_none());
    }

    #[test]
    fn find_student_by_id() {
        let catalog = Catalog::sample();
        let charlie = catalog.find_student(&StudentRef::Id(3)).unwrap();
        assert_eq!(charlie.name, "charlie");
        assert!(catalog.find_student(&StudentRef::Id(42)).is_none());
    }

    #[test]
    fn numeric_string_does_not_match_an_id() {
        // "2" as a name is not the student with id 2
        let catalog = Catalog::sample();
        assert!(catalog.find_student(&StudentRef::Name("2".to_string())).is_none());
    }

    #[test]
    fn listings_preserve_insertion_order() {
        let catalog = Catalog::sample();
        let titles: Vec<_> = catalog.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["AWS Questions", "Node.js Notes"]);
        let names: Vec<_> = catalog.students().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "charlie"]);
    }
}
