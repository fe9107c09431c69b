use arena_query::QueryKey;

/// The four listings a visitor can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Matches,
    Players,
    Teams,
    Tournaments,
}

impl Resource {
    pub const fn all() -> [Self; 4] {
        [Self::Matches, Self::Players, Self::Teams, Self::Tournaments]
    }
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Matches => "matches",
            Self::Players => "players",
            Self::Teams => "teams",
            Self::Tournaments => "tournaments",
        }
    }
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Matches => "/matches",
            Self::Players => "/players",
            Self::Teams => "/teams",
            Self::Tournaments => "/tournaments",
        }
    }
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Matches => "Matches",
            Self::Players => "Players",
            Self::Teams => "Teams",
            Self::Tournaments => "Tournaments",
        }
    }
    pub const fn singular(&self) -> &'static str {
        match self {
            Self::Matches => "match",
            Self::Players => "player",
            Self::Teams => "team",
            Self::Tournaments => "tournament",
        }
    }
    /// Name of the client component mounted for this listing.
    pub const fn component(&self) -> &'static str {
        match self {
            Self::Matches => "MatchesPageClient",
            Self::Players => "PlayersPageClient",
            Self::Teams => "TeamsPageClient",
            Self::Tournaments => "TournamentsPageClient",
        }
    }
    pub fn key(&self) -> QueryKey {
        QueryKey::from(self.slug())
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
