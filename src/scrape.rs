use html_escape::decode_html_entities;
use log::{debug, warn};
use scraper::{ElementRef, Html};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Ingredient, Recipe};
use crate::nlp::{NounClassifier, Tagger};
use crate::parser::StepParser;
use crate::quantity::Quantity;
use crate::sites::{HtmlTag, RecipeSource};

/// Raw recipe content read off a page, before instructions become steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipePage {
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    /// Instruction paragraphs in page order
    pub instructions: Vec<String>,
    pub other: BTreeMap<String, String>,
}

#[derive(Default)]
struct PageWalker {
    page: RecipePage,
    pending: Option<Ingredient>,
    label: Option<String>,
}

fn element_text(element: ElementRef) -> String {
    let raw: String = element.text().collect();
    // some sites double-encode entities
    let decoded = decode_html_entities(&raw);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl PageWalker {
    fn walk(&mut self, source: RecipeSource, element: ElementRef, section: Option<HtmlTag>) {
        let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
        let tag = source.classify(element.value().name(), &attrs);

        let section = match tag {
            Some(HtmlTag::IngredientsList) | Some(HtmlTag::StepsList) => tag,
            _ => section,
        };
        let in_ingredients = section == Some(HtmlTag::IngredientsList);

        match tag {
            Some(HtmlTag::Title) => {
                self.page.title = element_text(element);
                return;
            }
            Some(HtmlTag::OverviewLabel) => {
                let label = element_text(element).to_lowercase();
                let label = label.trim_matches(|c: char| ":,.!".contains(c) || c.is_whitespace());
                self.label = Some(label.to_string());
                return;
            }
            Some(HtmlTag::OverviewText) => {
                if let Some(label) = self.label.take() {
                    self.page.other.insert(label, element_text(element));
                }
                return;
            }
            Some(HtmlTag::Ingredient) if in_ingredients => {
                self.pending = Some(Ingredient::default());
            }
            Some(HtmlTag::IngredientQuantity) if in_ingredients => {
                let text = element_text(element);
                self.pending.get_or_insert_with(Ingredient::default).quantity =
                    Quantity::parse_nonzero(&text);
                return;
            }
            Some(HtmlTag::IngredientUnit) if in_ingredients => {
                let text = element_text(element);
                self.pending.get_or_insert_with(Ingredient::default).unit =
                    Some(text).filter(|t| !t.is_empty());
                return;
            }
            Some(HtmlTag::IngredientName) if in_ingredients => {
                let mut ingredient = self.pending.take().unwrap_or_default();
                ingredient.name = Some(element_text(element));
                self.page.ingredients.push(ingredient);
                return;
            }
            Some(HtmlTag::Step) if section == Some(HtmlTag::StepsList) => {
                let text = element_text(element);
                if !text.is_empty() {
                    self.page.instructions.push(text);
                }
                return;
            }
            _ => {}
        }

        for child in element.children().filter_map(ElementRef::wrap) {
            self.walk(source, child, section);
        }
    }
}

impl RecipePage {
    /// Reads title, overview fields, ingredients and instructions from a page
    /// of the given site. Ingredients and steps only count inside their list.
    pub fn parse(source: RecipeSource, html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut walker = PageWalker::default();
        walker.walk(source, document.root_element(), None);

        let page = walker.page;
        debug!(
            "Scraped {:?} from {}: {} ingredients, {} instructions",
            page.title,
            source,
            page.ingredients.len(),
            page.instructions.len()
        );
        if page.instructions.is_empty() {
            warn!("No instructions found on {} page {:?}", source, page.title);
        }
        page
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }

    /// Runs every instruction through the step parser.
    ///
    /// Ingredients the site only gave as a single line ("2 cups flour") are
    /// split into quantity, unit and name first.
    pub fn into_recipe<T: Tagger, C: NounClassifier>(self, parser: &StepParser<T, C>) -> Recipe {
        let ingredients = self
            .ingredients
            .into_iter()
            .map(|ingredient| {
                if ingredient.quantity.is_some() || ingredient.unit.is_some() {
                    return ingredient;
                }
                let parsed = parser.parse_ingredient(ingredient.name_or_empty());
                if parsed.name.is_some() {
                    parsed
                } else {
                    ingredient
                }
            })
            .collect();

        let mut recipe = parser.build_recipe(self.title, ingredients, &self.instructions);
        recipe.other = self.other;
        recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<p>  Stir \n the <b>sauce</b> &amp;amp; serve </p>");
        let p = html
            .select(&scraper::Selector::parse("p").unwrap())
            .next()
            .unwrap();
        assert_eq!(element_text(p), "Stir the sauce & serve");
    }

    #[test]
    fn test_steps_outside_list_are_ignored() {
        let html = r#"
            <p class="comp mntl-sc-block mntl-sc-block-html">Sign up for our newsletter.</p>
            <div class="comp mm-recipes-steps mntl-block">
                <p class="comp mntl-sc-block mntl-sc-block-html">Preheat the oven.</p>
            </div>
        "#;
        let page = RecipePage::parse(RecipeSource::AllRecipes, html);
        assert_eq!(page.instructions, vec!["Preheat the oven."]);
    }
}
