//! Provider categories and their endpoints

use super::decoder::ProviderFormat;
use std::collections::HashMap;
use std::fmt;

/// Selector choosing which external number provider to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl Category {
    /// Parse the single-letter path id (`p`, `f`, `e`, `r`)
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "p" => Some(Category::Prime),
            "f" => Some(Category::Fibonacci),
            "e" => Some(Category::Even),
            "r" => Some(Category::Random),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Category::Prime => "p",
            Category::Fibonacci => "f",
            Category::Even => "e",
            Category::Random => "r",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Prime => "prime",
            Category::Fibonacci => "fibonacci",
            Category::Even => "even",
            Category::Random => "random",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Prime,
            Category::Fibonacci,
            Category::Even,
            Category::Random,
        ]
    }

    /// How this category's provider encodes its numbers
    pub fn format(&self) -> ProviderFormat {
        match self {
            Category::Prime | Category::Fibonacci => ProviderFormat::JsonArray,
            Category::Even | Category::Random => ProviderFormat::LineDelimited,
        }
    }

    /// Environment variable overriding this category's endpoint
    pub fn url_env_key(&self) -> &'static str {
        match self {
            Category::Prime => "NUMBERS_PRIME_URL",
            Category::Fibonacci => "NUMBERS_FIBONACCI_URL",
            Category::Even => "NUMBERS_EVEN_URL",
            Category::Random => "NUMBERS_RANDOM_URL",
        }
    }

    fn default_url(&self) -> &'static str {
        match self {
            Category::Prime => "https://api.prime-numbers.io/prime",
            Category::Fibonacci => "https://fibonacci-api.com/sequence/5",
            Category::Even => "https://www.random.org/integers/?num=5&min=1&max=10000&col=1&base=10&format=plain&rnd=new",
            Category::Random => "https://www.random.org/integers/?num=5&min=1&max=10000&col=1&base=10&format=plain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Endpoint URL per category
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTable {
    urls: HashMap<Category, String>,
}

impl ProviderTable {
    pub fn url(&self, category: Category) -> &str {
        self.urls
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.default_url())
    }

    pub fn set(&mut self, category: Category, url: impl Into<String>) {
        self.urls.insert(category, url.into());
    }
}

impl Default for ProviderTable {
    fn default() -> Self {
        Self {
            urls: Category::all()
                .into_iter()
                .map(|c| (c, c.default_url().to_string()))
                .collect(),
        }
    }
}
