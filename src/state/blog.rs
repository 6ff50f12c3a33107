//! Blog feed state: cards, category chips, search and like toggles

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Chip that shows every card
pub const ALL_CATEGORIES: &str = "all";

/// How long a card takes to fade out before it is hidden
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// Visibility of a card in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVisibility {
    #[default]
    Visible,
    FadingOut {
        since: Instant,
    },
    Hidden,
}

/// A published post as rendered in the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCard {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author_name: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
    #[serde(skip)]
    pub liked: bool,
    #[serde(skip)]
    pub visibility: CardVisibility,
}

impl BlogCard {
    fn show(&mut self) {
        self.visibility = CardVisibility::Visible;
    }

    fn hide(&mut self, now: Instant) {
        if self.visibility == CardVisibility::Visible {
            self.visibility = CardVisibility::FadingOut { since: now };
        }
    }

    /// Settle a finished fade
    fn tick(&mut self, now: Instant) {
        if let CardVisibility::FadingOut { since } = self.visibility {
            if now.saturating_duration_since(since) >= FADE_DURATION {
                self.visibility = CardVisibility::Hidden;
            }
        }
    }

    /// Still occupying a row in the list
    pub fn is_listed(&self) -> bool {
        !matches!(self.visibility, CardVisibility::Hidden)
    }

    /// 1.0 when fully shown, easing down to 0.0 while fading out
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.visibility {
            CardVisibility::Visible => 1.0,
            CardVisibility::Hidden => 0.0,
            CardVisibility::FadingOut { since } => {
                let progress = now.saturating_duration_since(since).as_secs_f32()
                    / FADE_DURATION.as_secs_f32();
                1.0 - simple_easing::cubic_out(progress.min(1.0))
            }
        }
    }

    /// Like count including the viewer's own like
    pub fn like_count(&self) -> u32 {
        self.likes + u32::from(self.liked)
    }

    fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category.to_lowercase() == category
    }

    fn matches_query(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.excerpt.to_lowercase().contains(query)
            || self.author_name.to_lowercase().contains(query)
    }
}

/// Cards plus the chip, search and selection state of the feed page
#[derive(Debug, Clone)]
pub struct BlogFeed {
    pub cards: Vec<BlogCard>,
    chips: Vec<String>,
    active_chip: usize,
    pub query: String,
    pub selected: usize,
}

impl BlogFeed {
    pub fn new(cards: Vec<BlogCard>) -> Self {
        let mut chips = vec![ALL_CATEGORIES.to_string()];
        for card in &cards {
            let category = card.category.to_lowercase();
            if !chips.contains(&category) {
                chips.push(category);
            }
        }
        Self {
            cards,
            chips,
            active_chip: 0,
            query: String::new(),
            selected: 0,
        }
    }

    /// Load cards from a JSON array on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed {}", path.display()))?;
        let cards: Vec<BlogCard> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse feed {}", path.display()))?;
        tracing::info!("Loaded {} blog cards from {}", cards.len(), path.display());
        Ok(Self::new(cards))
    }

    pub fn chips(&self) -> &[String] {
        &self.chips
    }

    pub fn active_chip(&self) -> &str {
        &self.chips[self.active_chip]
    }

    pub fn is_chip_active(&self, index: usize) -> bool {
        self.active_chip == index
    }

    /// Activate a category chip and fade out cards outside it.
    /// Unknown categories are ignored.
    pub fn filter_by_category(&mut self, category: &str, now: Instant) {
        let category = category.to_lowercase();
        let Some(index) = self.chips.iter().position(|c| *c == category) else {
            tracing::debug!("unknown category chip: {category}");
            return;
        };
        self.active_chip = index;
        for card in &mut self.cards {
            if card.matches_category(&category) {
                card.show();
            } else {
                card.hide(now);
            }
        }
        self.clamp_selection();
    }

    /// Cycle to the next chip
    pub fn next_chip(&mut self, now: Instant) {
        let next = (self.active_chip + 1) % self.chips.len();
        let category = self.chips[next].clone();
        self.filter_by_category(&category, now);
    }

    /// Cycle to the previous chip
    pub fn prev_chip(&mut self, now: Instant) {
        let prev = if self.active_chip == 0 {
            self.chips.len() - 1
        } else {
            self.active_chip - 1
        };
        let category = self.chips[prev].clone();
        self.filter_by_category(&category, now);
    }

    /// Case-insensitive match on title, excerpt and author.
    /// Matching cards reappear at once; the rest fade out.
    pub fn search(&mut self, query: &str, now: Instant) {
        self.query = query.to_string();
        let needle = query.to_lowercase();
        for card in &mut self.cards {
            if card.matches_query(&needle) {
                card.show();
            } else {
                card.hide(now);
            }
        }
        self.clamp_selection();
    }

    pub fn push_query_char(&mut self, c: char, now: Instant) {
        let mut query = self.query.clone();
        query.push(c);
        self.search(&query, now);
    }

    pub fn pop_query_char(&mut self, now: Instant) {
        let mut query = self.query.clone();
        query.pop();
        self.search(&query, now);
    }

    /// Advance fade transitions
    pub fn tick(&mut self, now: Instant) {
        for card in &mut self.cards {
            card.tick(now);
        }
        self.clamp_selection();
    }

    /// Cards still shown in the list, with their index into `cards`
    pub fn listed(&self) -> impl Iterator<Item = (usize, &BlogCard)> + '_ {
        self.cards.iter().enumerate().filter(|(_, c)| c.is_listed())
    }

    pub fn listed_count(&self) -> usize {
        self.listed().count()
    }

    /// The highlighted card, if any are listed
    pub fn selected_card(&self) -> Option<&BlogCard> {
        self.listed().nth(self.selected).map(|(_, card)| card)
    }

    pub fn select_next(&mut self) {
        let count = self.listed_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flip the like state of the highlighted card
    pub fn toggle_like_selected(&mut self) -> Option<bool> {
        let (index, _) = self.listed().nth(self.selected)?;
        let card = &mut self.cards[index];
        card.liked = !card.liked;
        Some(card.liked)
    }

    fn clamp_selection(&mut self) {
        let count = self.listed_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Built-in feed used when no feed file is configured
    pub fn sample() -> Self {
        let card = |id: u32, title: &str, excerpt: &str, author: &str, category: &str, day: u32| {
            BlogCard {
                id,
                title: title.to_string(),
                excerpt: excerpt.to_string(),
                author_name: author.to_string(),
                category: category.to_string(),
                published_at: Utc
                    .with_ymd_and_hms(2024, 5, day, 9, 0, 0)
                    .single()
                    .unwrap_or_default(),
                likes: id * 3,
                liked: false,
                visibility: CardVisibility::Visible,
            }
        };
        Self::new(vec![
            card(
                1,
                "Getting Started with Rust",
                "Ownership, borrowing and why the compiler is your friend.",
                "Maya Chen",
                "Technology",
                2,
            ),
            card(
                2,
                "A Week in Lisbon",
                "Tiled streets, custard tarts and a lot of hills.",
                "Tom Okafor",
                "Travel",
                9,
            ),
            card(
                3,
                "Sourdough for Beginners",
                "Feeding a starter without losing your mind.",
                "Lena Novak",
                "Food",
                14,
            ),
            card(
                4,
                "Designing Terminal Interfaces",
                "Layouts, colors and keyboard flow for text UIs.",
                "Maya Chen",
                "Technology",
                21,
            ),
        ])
    }
}

impl Default for BlogFeed {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
