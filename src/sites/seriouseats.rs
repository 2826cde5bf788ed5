use super::{has_attr, only_attr, HtmlTag};

pub(super) fn classify(tag: &str, attrs: &[(&str, &str)]) -> Option<HtmlTag> {
    match tag {
        "h1" if only_attr(attrs, "class", "heading__title") => Some(HtmlTag::Title),
        "span" if only_attr(attrs, "class", "meta-text__label") => Some(HtmlTag::OverviewLabel),
        "span" if only_attr(attrs, "class", "meta-text__data") => Some(HtmlTag::OverviewText),
        "span" if only_attr(attrs, "data-ingredient-quantity", "true") => {
            Some(HtmlTag::IngredientQuantity)
        }
        "span" if only_attr(attrs, "data-ingredient-unit", "true") => {
            Some(HtmlTag::IngredientUnit)
        }
        "span" if only_attr(attrs, "data-ingredient-name", "true") => {
            Some(HtmlTag::IngredientName)
        }
        "section" if has_attr(attrs, "class", "comp section--ingredients section") => {
            Some(HtmlTag::IngredientsList)
        }
        "section" if has_attr(attrs, "class", "comp section--instructions section") => {
            Some(HtmlTag::StepsList)
        }
        "li" if has_attr(attrs, "class", "structured-ingredients__list-item") => {
            Some(HtmlTag::Ingredient)
        }
        "p" if has_attr(attrs, "class", "comp mntl-sc-block mntl-sc-block-html") => {
            Some(HtmlTag::Step)
        }
        _ => None,
    }
}
