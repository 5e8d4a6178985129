// Resume content aggregation: frontend payload, chat grounding text and the
// years-of-experience estimate.

pub mod aggregator;
pub mod content;
pub mod context;
pub mod experience;
pub mod handlers;
pub mod skills;

#[cfg(test)]
pub mod test_support;
