// SPDX-License-Identifier: MPL-2.0
//! Recipe browse screen: debounced search, category filter, trending row,
//! like/share actions, and lazily-loaded thumbnails.
//!
//! Thumbnails are deferred: a card registers its image URL on arrival and
//! the bytes are only fetched once the card first scrolls into view.

use crate::i18n::I18n;
use crate::recipe::{self, Recipe, RecipeId};
use crate::session::Session;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::state::{visible_range, Debouncer, LazyLoader};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, image, scrollable, text_input, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How many recipes the trending row shows.
pub const TRENDING_COUNT: usize = 3;

/// Browse screen state.
#[derive(Debug)]
pub struct RecipesState {
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub search_query: String,
    pub category: String,
    pub search_debouncer: Debouncer<String>,
    pub lazy: LazyLoader,
    pub thumbnails: HashMap<RecipeId, image::Handle>,
    viewport_height: f32,
}

impl RecipesState {
    #[must_use]
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            recipes: Vec::new(),
            loading: false,
            search_query: String::new(),
            category: "all".to_string(),
            search_debouncer: Debouncer::new(search_debounce),
            lazy: LazyLoader::new(),
            thumbnails: HashMap::new(),
            // Stands in until the first scroll event reports the real
            // viewport; sized to the minimum window height.
            viewport_height: 480.0,
        }
    }

    /// Installs a freshly fetched recipe list, resetting the deferred
    /// thumbnail registry. Already-downloaded thumbnails are kept.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.lazy.clear();
        for recipe in &recipes {
            if let Some(url) = &recipe.image_url {
                if !self.thumbnails.contains_key(&recipe.id) {
                    self.lazy.register(recipe.id.clone(), url.clone());
                }
            }
        }
        self.recipes = recipes;
        self.loading = false;
    }

    /// Promotes deferred thumbnails for the rows inside the viewport.
    /// Each returned pair is promoted exactly once.
    pub fn promote_visible(&mut self, offset_y: f32) -> Vec<(RecipeId, String)> {
        let range = visible_range(
            offset_y,
            self.viewport_height,
            sizing::CARD_HEIGHT + spacing::XS,
            self.recipes.len(),
        );
        let mut promoted = Vec::new();
        for recipe in &self.recipes[range] {
            if let Some(url) = self.lazy.mark_visible(&recipe.id) {
                promoted.push((recipe.id.clone(), url));
            }
        }
        promoted
    }
}

/// Messages emitted by the browse screen.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    CategorySelected(String),
    LikePressed(RecipeId),
    SharePressed(RecipeId),
    CopyLinkPressed(RecipeId),
    Scrolled(Viewport),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Fetch the list with the current category and search text.
    FetchRequested,
    LikeRequested(RecipeId),
    ShareRequested(RecipeId),
    CopyLinkRequested(RecipeId),
    /// Fetch thumbnail bytes for newly visible cards.
    ThumbnailsRequested(Vec<(RecipeId, String)>),
}

/// Process a browse-screen message and return the corresponding event.
pub fn update(message: Message, state: &mut RecipesState, now: Instant) -> Event {
    match message {
        Message::SearchChanged(query) => {
            state.search_query = query.clone();
            // Keystrokes collapse to one fetch once typing pauses.
            state.search_debouncer.push(query, now);
            Event::None
        }
        Message::CategorySelected(id) => {
            state.category = id;
            // Cancel a pending search emission; this fetch carries the
            // current query anyway.
            state.search_debouncer.cancel();
            state.loading = true;
            Event::FetchRequested
        }
        Message::LikePressed(id) => Event::LikeRequested(id),
        Message::SharePressed(id) => Event::ShareRequested(id),
        Message::CopyLinkPressed(id) => Event::CopyLinkRequested(id),
        Message::Scrolled(viewport) => {
            state.viewport_height = viewport.bounds().height;
            let promoted = state.promote_visible(viewport.absolute_offset().y);
            if promoted.is_empty() {
                Event::None
            } else {
                Event::ThumbnailsRequested(promoted)
            }
        }
    }
}

/// Polls the search debouncer. Returns the settled query when the wait
/// window has elapsed.
pub fn poll_search(state: &mut RecipesState, now: Instant) -> Option<String> {
    let query = state.search_debouncer.poll(now)?;
    state.loading = true;
    Some(query)
}

/// Contextual data needed to render the browse screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a RecipesState,
    pub session: &'a Session,
}

/// Render the browse screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let lang = ctx.i18n.current_locale().language.as_str().to_string();

    let search = text_input(&ctx.i18n.tr("search-placeholder"), &ctx.state.search_query)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::Fill);

    let mut category_row = Row::new().spacing(spacing::XXS);
    for category in recipe::categories() {
        let label = format!("{} {}", category.icon, category.localized_name(&lang));
        let mut item = button(Text::new(label).size(typography::BODY_SM))
            .on_press(Message::CategorySelected(category.id.to_string()))
            .padding(spacing::XXS);
        if ctx.state.category == category.id {
            item = item.style(button::primary);
        } else {
            item = item.style(button::secondary);
        }
        category_row = category_row.push(item);
    }

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(Text::new(ctx.i18n.tr("recipes-title")).size(typography::TITLE_MD))
        .push(search)
        .push(category_row);

    let trending = recipe::trending(&ctx.state.recipes, TRENDING_COUNT);
    if !trending.is_empty() {
        let mut trending_row = Row::new().spacing(spacing::XS);
        for recipe in trending {
            trending_row = trending_row.push(
                Container::new(
                    Text::new(format!("🔥 {} ({})", recipe.title, recipe.likes_count()))
                        .size(typography::BODY_SM),
                )
                .padding(spacing::XXS)
                .style(trending_chip_style),
            );
        }
        content = content
            .push(Text::new(ctx.i18n.tr("trending-title")).size(typography::TITLE_SM))
            .push(trending_row);
    }

    if ctx.state.recipes.is_empty() && !ctx.state.loading {
        content = content.push(Text::new(ctx.i18n.tr("recipes-empty")).size(typography::BODY));
    } else {
        let mut list = Column::new().spacing(spacing::XS);
        for recipe in &ctx.state.recipes {
            list = list.push(view_card(&ctx, recipe, &lang));
        }
        content = content.push(
            scrollable(list)
                .on_scroll(Message::Scrolled)
                .height(Length::Fill),
        );
    }

    content.into()
}

/// Render a single recipe card.
fn view_card<'a>(ctx: &ViewContext<'a>, recipe: &'a Recipe, lang: &str) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match ctx.state.thumbnails.get(&recipe.id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .into(),
        None => Container::new(Text::new("🍲").size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let meta = format!(
        "{} · ★ {:.1} · ♥ {}",
        recipe::category_display_name(&recipe.category, lang),
        recipe.avg_rating(),
        recipe.likes_count(),
    );

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&recipe.title).size(typography::BODY_LG))
        .push(Text::new(meta).size(typography::BODY_SM));

    let liked = ctx
        .session
        .user_id
        .as_deref()
        .is_some_and(|user| recipe.likes.contains(user));
    let like_label = if liked {
        format!("♥ {}", ctx.i18n.tr("like-button"))
    } else {
        format!("♡ {}", ctx.i18n.tr("like-button"))
    };

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(
            button(Text::new(like_label).size(typography::BODY_SM))
                .on_press(Message::LikePressed(recipe.id.clone()))
                .padding(spacing::XXS),
        )
        .push(
            button(Text::new(ctx.i18n.tr("share-button")).size(typography::BODY_SM))
                .on_press(Message::SharePressed(recipe.id.clone()))
                .padding(spacing::XXS),
        )
        .push(
            button(Text::new(ctx.i18n.tr("copy-link-button")).size(typography::BODY_SM))
                .on_press(Message::CopyLinkPressed(recipe.id.clone()))
                .padding(spacing::XXS),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(thumbnail)
        .push(Container::new(details).width(Length::Fill))
        .push(actions);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(spacing::XS)
        .style(card_style)
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: theme.extended_palette().background.strong.color,
        },
        ..Default::default()
    }
}

fn trending_chip_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().primary.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(theme.extended_palette().primary.weak.text),
        ..Default::default()
    }
}
