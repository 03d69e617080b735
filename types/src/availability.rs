#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Availability::Available => Availability::Unavailable,
            Availability::Unavailable => Availability::Available,
        }
    }
}

/// A consultant on the bench board, with their skills and current status.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConsultant {
    pub id: u32,
    pub name: String,
    pub years_experience: u8,
    pub tech: Vec<String>,
    pub visa: String,
    /// Out of five.
    pub rating: u8,
    pub availability: Availability,
}

impl BenchConsultant {
    /// Up to two initials, e.g. "JS" for "John Smith".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityCounts {
    pub available: usize,
    pub on_project: usize,
}

pub fn count_availability(consultants: &[BenchConsultant]) -> AvailabilityCounts {
    consultants
        .iter()
        .fold(AvailabilityCounts::default(), |mut counts, c| {
            match c.availability {
                Availability::Available => counts.available += 1,
                Availability::Unavailable => counts.on_project += 1,
            }
            counts
        })
}

/// Case-insensitive search over name and tech stack. An empty query keeps everyone.
pub fn search_bench<'a>(consultants: &'a [BenchConsultant], query: &str) -> Vec<&'a BenchConsultant> {
    let query = query.trim().to_lowercase();

    consultants
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.name.to_lowercase().contains(&query)
                || c.tech.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}

/// Flip one consultant's status. Returns the new status, or `None` for an unknown id.
pub fn toggle_availability(consultants: &mut [BenchConsultant], id: u32) -> Option<Availability> {
    let consultant = consultants.iter_mut().find(|c| c.id == id)?;
    consultant.availability = consultant.availability.toggled();
    Some(consultant.availability)
}
