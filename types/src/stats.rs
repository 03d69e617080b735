#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Activity,
    Briefcase,
    FileText,
    Calendar,
    CheckCircle,
}

impl Icon {
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::Users => "icon-users",
            Icon::Activity => "icon-activity",
            Icon::Briefcase => "icon-briefcase",
            Icon::FileText => "icon-file-text",
            Icon::Calendar => "icon-calendar",
            Icon::CheckCircle => "icon-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Slate,
    Blue,
    Green,
    Purple,
    Orange,
}

impl ColorTheme {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorTheme::Slate => "theme-slate",
            ColorTheme::Blue => "theme-blue",
            ColorTheme::Green => "theme-green",
            ColorTheme::Purple => "theme-purple",
            ColorTheme::Orange => "theme-orange",
        }
    }
}

/// A small card showing a labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub title: String,
    pub value: String,
    pub icon: Option<Icon>,
    pub subtitle: Option<String>,
    pub color: ColorTheme,
}

impl StatTile {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            icon: None,
            subtitle: None,
            color: ColorTheme::default(),
        }
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn color(mut self, color: ColorTheme) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemLoad {
    Normal,
    Elevated,
    Critical,
}

impl SystemLoad {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemLoad::Normal => "Normal",
            SystemLoad::Elevated => "Elevated",
            SystemLoad::Critical => "Critical",
        }
    }

    fn color(&self) -> ColorTheme {
        match self {
            SystemLoad::Normal => ColorTheme::Green,
            SystemLoad::Elevated => ColorTheme::Orange,
            SystemLoad::Critical => ColorTheme::Orange,
        }
    }
}

/// Figures behind the admin overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: u64,
    pub system_load: SystemLoad,
    pub jobs_posted: u64,
}

impl AdminStats {
    pub fn tiles(&self) -> [StatTile; 3] {
        [
            StatTile::new("Total Users", group_thousands(self.total_users))
                .icon(Icon::Users)
                .subtitle("Across all roles")
                .color(ColorTheme::Blue),
            StatTile::new("System Load", self.system_load.as_str())
                .icon(Icon::Activity)
                .subtitle("All services operational")
                .color(self.system_load.color()),
            StatTile::new("Jobs Posted", group_thousands(self.jobs_posted))
                .icon(Icon::Briefcase)
                .subtitle("Across all departments")
                .color(ColorTheme::Purple),
        ]
    }
}

/// Figures behind the recruiter dashboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecruiterStats {
    pub active_jobs: u64,
    pub total_applicants: u64,
    pub interviews: u64,
    pub hires: u64,
}

impl RecruiterStats {
    pub fn tiles(&self) -> [StatTile; 4] {
        [
            StatTile::new("Active Jobs", group_thousands(self.active_jobs))
                .icon(Icon::Briefcase)
                .color(ColorTheme::Blue),
            StatTile::new("Total Applicants", group_thousands(self.total_applicants))
                .icon(Icon::Users)
                .color(ColorTheme::Purple),
            StatTile::new("Interviews", group_thousands(self.interviews))
                .icon(Icon::Calendar)
                .color(ColorTheme::Orange),
            StatTile::new("Hires", group_thousands(self.hires))
                .icon(Icon::CheckCircle)
                .color(ColorTheme::Green),
        ]
    }
}

/// Format a count with comma thousands separators: `1240` -> `"1,240"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(85), "85");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1240), "1,240");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn admin_tiles() {
        let stats = AdminStats {
            total_users: 1240,
            system_load: SystemLoad::Normal,
            jobs_posted: 85,
        };
        let values: Vec<_> = stats.tiles().into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec!["1,240", "Normal", "85"]);
    }

    #[test]
    fn recruiter_tiles_keep_order() {
        let stats = RecruiterStats {
            active_jobs: 12,
            total_applicants: 148,
            interviews: 8,
            hires: 3,
        };
        let tiles = stats.tiles();
        let titles: Vec<_> = tiles.iter().map(|t| t.title.as_str()).collect();
        let values: Vec<_> = tiles.iter().map(|t| t.value.as_str()).collect();

        assert_eq!(titles, vec!["Active Jobs", "Total Applicants", "Interviews", "Hires"]);
        assert_eq!(values, vec!["12", "148", "8", "3"]);
    }
}
