//! Row data shown by the grid
//!
//! Rows are generated once at startup and never mutated afterwards.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Felipe", "Gabriela", "Heitor", "Isabela", "João",
    "Karina", "Lucas", "Marina", "Nicolas", "Olivia", "Pedro", "Rafaela", "Samuel", "Tatiana",
    "Vitor",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barbosa", "Cardoso", "Dias", "Ferreira", "Gomes", "Lima", "Martins", "Nunes",
    "Oliveira", "Pereira", "Ribeiro", "Santos", "Souza", "Teixeira",
];

/// Relationship status of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Single,
    Relationship,
    Complicated,
}

impl Status {
    pub fn name(&self) -> &str {
        match self {
            Status::Single => "Single",
            Status::Relationship => "Relationship",
            Status::Complicated => "Complicated",
        }
    }
}

/// Addressable fields of a [`Person`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
    Age,
    Visits,
    Status,
}

/// A single grid row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub visits: u32,
    pub status: Status,
    /// Percentage, 0..=100
    pub progress: u8,
}

impl Person {
    pub fn field(&self, field: PersonField) -> String {
        match field {
            PersonField::FirstName => self.first_name.clone(),
            PersonField::LastName => self.last_name.clone(),
            PersonField::Age => self.age.to_string(),
            PersonField::Visits => self.visits.to_string(),
            PersonField::Status => self.status.name().to_string(),
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let status = match rng.random_range(0..3) {
            0 => Status::Single,
            1 => Status::Relationship,
            _ => Status::Complicated,
        };
        Self {
            first_name: FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())].to_string(),
            last_name: LAST_NAMES[rng.random_range(0..LAST_NAMES.len())].to_string(),
            age: rng.random_range(15..=80),
            visits: rng.random_range(0..1000),
            status,
            progress: rng.random_range(0..=100),
        }
    }
}

/// Generate `quantity` random people
pub fn make_data<R: Rng + ?Sized>(quantity: usize, rng: &mut R) -> Vec<Person> {
    (0..quantity).map(|_| Person::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_make_data_quantity_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let people = make_data(55, &mut rng);
        assert_eq!(people.len(), 55);
        for person in &people {
            assert!((15..=80).contains(&person.age));
            assert!(person.progress <= 100);
            assert!(!person.first_name.is_empty());
        }
    }

    #[test]
    fn test_make_data_is_deterministic_per_seed() {
        let a = make_data(10, &mut StdRng::seed_from_u64(42));
        let b = make_data(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_make_data_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(make_data(0, &mut rng).is_empty());
    }
}
