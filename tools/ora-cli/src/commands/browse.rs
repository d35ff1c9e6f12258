//! Catalog browsing.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context as _, Result};
use console::style;
use ora_commerce::catalog::{
    Artifact, BlogPost, Catalog, CatalogItem, Course, CurriculumCourse, LibraryItem, Teacher,
};
use ora_commerce::search::{presets, CatalogEngine, DatePreset, FilterState, SelectMode, SortKey};
use ora_commerce::view::CatalogView;
use ora_commerce::{Currency, Money};
use serde::Serialize;

use super::{BrowseArgs, Domain};
use crate::context::Context;
use crate::output::{availability_badge, selection_marker};

/// Column cap for titles in table output.
const MAX_TITLE_WIDTH: usize = 36;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let pricing = &ctx.config.pricing;

    match args.domain {
        Domain::Artifacts => browse(
            storefront.artifacts,
            presets::artifact_engine(pricing)?,
            &args,
            ctx,
            artifact_row,
        ),
        Domain::Courses => browse(
            storefront.courses,
            presets::course_engine(pricing)?,
            &args,
            ctx,
            course_row,
        ),
        Domain::Blog => browse(storefront.blog, presets::blog_engine(), &args, ctx, blog_row),
        Domain::Library => browse(
            storefront.library,
            presets::library_engine(),
            &args,
            ctx,
            library_row,
        ),
        Domain::Curriculum => browse(
            storefront.curriculum,
            presets::curriculum_engine(),
            &args,
            ctx,
            curriculum_row,
        ),
        Domain::Teachers => browse(
            storefront.teachers,
            presets::teacher_engine(),
            &args,
            ctx,
            teacher_row,
        ),
    }
}

fn browse<T>(
    catalog: Catalog<T>,
    engine: CatalogEngine<T>,
    args: &BrowseArgs,
    ctx: &Context,
    row: fn(&T) -> Vec<String>,
) -> Result<()>
where
    T: CatalogItem + Serialize,
{
    let currency = ctx.config.pricing.currency()?;
    let state = build_state(&engine, args, currency)?;
    let sort = parse_sort(&engine, args.sort.as_deref(), ctx)?;

    let mut view = CatalogView::new(Arc::new(catalog), engine);
    view.set_state(state);
    view.set_sort(sort);

    let page = view.page(args.page, args.per_page);
    let facets = view.facet_counts();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "catalog": view.engine().name(),
            "sort": view.sort(),
            "results": page.items,
            "pagination": page.pagination,
            "chips": view.chips(),
            "facets": facets,
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "{}: {} of {}",
        view.engine().name(),
        view.result_count(),
        view.catalog().len()
    ));

    if page.is_empty() {
        ctx.output.info("Nothing matches the current filters");
    } else {
        let rows: Vec<Vec<String>> = page.items.iter().map(|item| row(item)).collect();
        let widths = column_widths(&rows);
        for cols in &rows {
            let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
            ctx.output.table_row(&cols, &widths);
        }
        let p = page.pagination;
        ctx.output.info(&format!(
            "Page {}/{} (items {}-{} of {}), sorted by {}",
            p.page,
            p.total_pages,
            p.start_item(),
            p.end_item(),
            p.total,
            view.sort().display_name()
        ));
    }

    if !view.chips().is_empty() {
        ctx.output.header("Active filters");
        for chip in view.chips() {
            ctx.output.list_item(&chip.label);
        }
    }

    for summary in &facets {
        ctx.output.header(&summary.label);
        for value in summary.values.iter().filter(|v| v.count > 0 || v.selected) {
            ctx.output.list_item(&format!(
                "{} {} ({}) {}",
                selection_marker(value.selected),
                value.label,
                value.count,
                style(format!("{}={}", summary.key, value.value)).dim()
            ));
        }
    }

    Ok(())
}

/// Turn command-line flags into a filter state for `engine`.
fn build_state<T: CatalogItem>(
    engine: &CatalogEngine<T>,
    args: &BrowseArgs,
    currency: Currency,
) -> Result<FilterState> {
    let mut state = engine.reset();

    if let Some(query) = &args.search {
        state.search = query.clone();
    }

    for pair in &args.facets {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Facet must be key=value, got '{}'", pair))?;
        let facet = engine.facet(key).ok_or_else(|| {
            let known: Vec<&str> = engine.facets().iter().map(|f| f.key()).collect();
            anyhow!("Unknown facet '{}'. Available: {}", key, known.join(", "))
        })?;
        match facet.mode() {
            SelectMode::Multi => {
                if !state.selection(key).contains(value) {
                    state.toggle(key, value);
                }
            }
            SelectMode::Single => state.select(key, value),
        }
    }
    engine.validate(&state)?;

    if args.min_price.is_some() || args.max_price.is_some() {
        let bounds = engine
            .price_bounds()
            .ok_or_else(|| anyhow!("The {} catalog has no price filter", engine.name()))?;
        let min = args
            .min_price
            .map(|units| Money::whole(units, currency))
            .unwrap_or(bounds.min);
        let max = args
            .max_price
            .map(|units| Money::whole(units, currency))
            .unwrap_or(bounds.max);
        state
            .set_price_range(min, max)
            .context("Invalid price range")?;
    }

    if let Some(date) = &args.date {
        if !engine.has_date_filter() {
            bail!("The {} catalog has no date filter", engine.name());
        }
        state.date = DatePreset::from_str(date).ok_or_else(|| {
            let known: Vec<&str> = DatePreset::ALL.iter().map(DatePreset::as_str).collect();
            anyhow!("Unknown date window '{}'. Available: {}", date, known.join(", "))
        })?;
    }

    Ok(state)
}

fn parse_sort<T: CatalogItem>(
    engine: &CatalogEngine<T>,
    sort: Option<&str>,
    ctx: &Context,
) -> Result<SortKey> {
    let Some(sort) = sort else {
        return Ok(engine.default_sort());
    };

    let Some(key) = SortKey::ALL.iter().copied().find(|k| k.as_str() == sort) else {
        let known: Vec<&str> = engine.sort_keys().iter().map(SortKey::as_str).collect();
        bail!("Unknown sort key '{}'. Available: {}", sort, known.join(", "));
    };

    if !engine.sort_keys().contains(&key) {
        ctx.output.warn(&format!(
            "The {} catalog does not sort by '{}'; keeping catalog order",
            engine.name(),
            sort
        ));
    }
    Ok(key)
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
                .min(MAX_TITLE_WIDTH)
        })
        .collect()
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TITLE_WIDTH {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_TITLE_WIDTH - 1).collect();
    short.push('…');
    short
}

fn artifact_row(a: &Artifact) -> Vec<String> {
    vec![
        a.id.to_string(),
        truncate(&a.name),
        a.price.display(),
        availability_badge(a.availability),
    ]
}

fn course_row(c: &Course) -> Vec<String> {
    vec![
        c.id.to_string(),
        truncate(&c.title),
        c.price.display(),
        c.starts_on.to_string(),
        c.level.label().to_string(),
    ]
}

fn blog_row(p: &BlogPost) -> Vec<String> {
    vec![
        p.id.to_string(),
        truncate(&p.title),
        p.published_on.to_string(),
        p.category.label().to_string(),
    ]
}

fn library_row(l: &LibraryItem) -> Vec<String> {
    vec![
        l.id.to_string(),
        truncate(&l.title),
        l.author.clone(),
        l.format.label().to_string(),
    ]
}

fn curriculum_row(c: &CurriculumCourse) -> Vec<String> {
    vec![
        c.id.to_string(),
        truncate(&c.title),
        format!("{}%", c.progress_percent()),
        c.status().label().to_string(),
    ]
}

fn teacher_row(t: &Teacher) -> Vec<String> {
    let directions: Vec<&str> = t.directions.iter().map(|d| d.label()).collect();
    vec![
        t.id.to_string(),
        truncate(&t.name),
        directions.join(", "),
        format!("★ {:.1}", t.rating()),
    ]
}
