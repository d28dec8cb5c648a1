use crate::domain::filter::{ALL_AREAS, ALL_TYPES};
use crate::domain::{Area, FilterSpec, PriceBand, PropertyType};
use maud::{html, Markup};

/// The search bar plus filter panel. Submits back to `/listings` as a GET so
/// every result page is linkable.
pub fn search_filters(spec: &FilterSpec) -> Markup {
    let band = PriceBand::matching(&spec.price_range);
    let custom = band.is_none().then_some(&spec.price_range);

    html! {
        form class="search-filters" method="get" action="/listings" {
            div class="search-bar" {
                label class="sr-only" for="q" { "Search" }
                input
                    type="search"
                    id="q"
                    name="q"
                    value=(spec.query)
                    placeholder="Search by location, property type...";
                button type="submit" class="btn" { "Search" }
            }

            details class="filter-panel" open[spec.has_active_filters()] {
                summary {
                    "Filters"
                    @if spec.has_active_filters() {
                        span class="filter-dot" { "!" }
                    }
                }

                div class="filter-grid" {
                    label {
                        "Area"
                        select name="area" {
                            option value=(ALL_AREAS) selected[spec.area.is_none()] { (ALL_AREAS) }
                            @for area in Area::ALL {
                                option value=(area.label()) selected[spec.area == Some(area)] { (area.label()) }
                            }
                        }
                    }

                    label {
                        "Property Type"
                        select name="type" {
                            option value=(ALL_TYPES) selected[spec.property_type.is_none()] { (ALL_TYPES) }
                            @for t in PropertyType::ALL {
                                option value=(t.label()) selected[spec.property_type == Some(t)] { (t.label()) }
                            }
                        }
                    }

                    label {
                        "Price Range"
                        select name="price" {
                            @for b in PriceBand::ALL {
                                option value=(b.key()) selected[band.unwrap_or(PriceBand::Any) == b] { (b.label()) }
                            }
                        }
                    }

                    // Custom bounds outside the presets survive a resubmit.
                    fieldset class="price-bounds" {
                        legend { "Custom Range (₦/yr)" }
                        input
                            type="number"
                            name="min"
                            value=[custom.map(|r| r.min)]
                            min="0"
                            placeholder="Min";
                        input
                            type="number"
                            name="max"
                            value=[custom.and_then(|r| r.max)]
                            min="0"
                            placeholder="Max";
                    }

                    label class="checkbox" {
                        input type="checkbox" name="verified" value="true" checked[spec.verified_only];
                        "Verified Only"
                    }
                }

                div class="filter-actions" {
                    button type="submit" class="btn" { "Apply" }
                    @if spec.has_active_filters() {
                        a class="btn btn-ghost" href="/listings" { "✕ Clear Filters" }
                    }
                }
            }
        }
    }
}
