mod pattern;

pub use pattern::PatternMatcher;
