use super::{has_attr, only_attr, HtmlTag};

const LABEL_CLASS: &str =
    "BaseWrap-sc-gjQpdd BaseText-ewhhUZ InfoSliceKey-gHIvng iUEiRd dWUQxN hykkRA";
const VALUE_CLASS: &str =
    "BaseWrap-sc-gjQpdd BaseText-ewhhUZ InfoSliceValue-tfmqg iUEiRd bbekcU fkSlPp";
const INGREDIENT_CLASS: &str =
    "BaseWrap-sc-gjQpdd BaseText-ewhhUZ Description-cSrMCf iUEiRd bGCtOd fsKnGI";

/// Epicurious ingredients come as a single description line, and every
/// paragraph that isn't an overview field is a step.
pub(super) fn classify(tag: &str, attrs: &[(&str, &str)]) -> Option<HtmlTag> {
    match tag {
        "h1" if has_attr(attrs, "data-testid", "ContentHeaderHed") => Some(HtmlTag::Title),
        "p" if only_attr(attrs, "class", LABEL_CLASS) => Some(HtmlTag::OverviewLabel),
        "p" if only_attr(attrs, "class", VALUE_CLASS) => Some(HtmlTag::OverviewText),
        "p" => Some(HtmlTag::Step),
        "div" if has_attr(attrs, "data-testid", "IngredientList") => {
            Some(HtmlTag::IngredientsList)
        }
        "div" if only_attr(attrs, "class", INGREDIENT_CLASS) => Some(HtmlTag::IngredientName),
        "div" if has_attr(attrs, "data-testid", "InstructionsWrapper") => {
            Some(HtmlTag::StepsList)
        }
        _ => None,
    }
}
