use srq_core::models::activity::SuggestedActivity;
use srq_core::models::level::DistressLevel;

/// Activities suggested for `level`, in catalog order.
///
/// `None` never has suggestions. Only activities tagged with exactly `level`
/// are returned.
pub fn suggestions_for(level: DistressLevel, catalog: &[SuggestedActivity]) -> Vec<SuggestedActivity> {
    if level == DistressLevel::None {
        return Vec::new();
    }

    let mut suggestions: Vec<SuggestedActivity> = catalog
        .iter()
        .filter(|a| a.level == level)
        .cloned()
        .collect();
    suggestions.sort_by_key(|a| a.position);
    suggestions
}
