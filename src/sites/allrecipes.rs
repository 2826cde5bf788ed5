use super::{has_attr, only_attr, HtmlTag};

pub(super) fn classify(tag: &str, attrs: &[(&str, &str)]) -> Option<HtmlTag> {
    match tag {
        "h1" if only_attr(attrs, "class", "article-heading text-headline-400") => {
            Some(HtmlTag::Title)
        }
        "div" if only_attr(attrs, "class", "mm-recipes-details__label") => {
            Some(HtmlTag::OverviewLabel)
        }
        "div" if only_attr(attrs, "class", "mm-recipes-details__value") => {
            Some(HtmlTag::OverviewText)
        }
        "div" if has_attr(attrs, "class", "comp mm-recipes-steps mntl-block") => {
            Some(HtmlTag::StepsList)
        }
        "ul" if has_attr(attrs, "class", "mm-recipes-structured-ingredients__list") => {
            Some(HtmlTag::IngredientsList)
        }
        "li" if has_attr(attrs, "class", "mm-recipes-structured-ingredients__list-item ") => {
            Some(HtmlTag::Ingredient)
        }
        "span" if only_attr(attrs, "data-ingredient-quantity", "true") => {
            Some(HtmlTag::IngredientQuantity)
        }
        "span" if only_attr(attrs, "data-ingredient-unit", "true") => {
            Some(HtmlTag::IngredientUnit)
        }
        "span" if only_attr(attrs, "data-ingredient-name", "true") => {
            Some(HtmlTag::IngredientName)
        }
        "p" if has_attr(attrs, "class", "comp mntl-sc-block mntl-sc-block-html") => {
            Some(HtmlTag::Step)
        }
        _ => None,
    }
}
