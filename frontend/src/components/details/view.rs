//! View rendering for the detail view component.
//!
//! Each course fee card is drawn from the structure `common::fees` extracted
//! for its pattern; fields a card does not know are appended through the
//! generic field list, so nothing stored is left out. Unknown records show
//! their raw JSON.

use super::state::DetailViewComponent;
use common::model::display::{
    CourseFeeCard, DetailView, FeeBlock, FieldEntry, FieldValue, NestedCard, OtherFeesTable,
    RtaCard, SimpleCard, UnknownCard,
};
use yew::prelude::*;

pub fn view(component: &DetailViewComponent, _ctx: &Context<DetailViewComponent>) -> Html {
    if component.loading {
        return html! { <div class="detail-loading">{"Loading course details..."}</div> };
    }

    match (&component.detail, &component.error) {
        (Some(detail), _) => build_detail(detail),
        (None, Some(error)) => html! {
            <div class="detail-error">{ format!("Could not load the course details: {error}") }</div>
        },
        (None, None) => html! {
            <div class="detail-empty">{"Choose a branch and a license category."}</div>
        },
    }
}

fn build_detail(detail: &DetailView) -> Html {
    html! {
        <div class="detail-root">
            { build_section("Documents Required", &detail.documents) }
            { build_section("Course Details", &detail.course) }
            { build_section("Lecture Details", &detail.lectures) }
            <section class="detail-section">
                <h3>{"Course Fees"}</h3>
                <div class="fee-cards">
                    { for detail.course_fees.iter().map(build_fee_card) }
                </div>
            </section>
            {
                match &detail.other_fees {
                    Some(table) => build_other_fees(table),
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_section(title: &str, entries: &[FieldEntry]) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <section class="detail-section">
            <h3>{ title.to_string() }</h3>
            { build_fields(entries) }
        </section>
    }
}

fn build_fields(entries: &[FieldEntry]) -> Html {
    html! {
        <div class="field-list">
            { for entries.iter().map(|entry| html! {
                <div class="field">
                    <span class="field-label">{ entry.label.clone() }</span>
                    { build_field_value(&entry.value) }
                </div>
            }) }
        </div>
    }
}

fn build_field_value(value: &FieldValue) -> Html {
    match value {
        FieldValue::Text(text) => html! { <span class="field-value">{ text.clone() }</span> },
        FieldValue::Chips(items) => html! {
            <div class="chips">
                { for items.iter().map(|item| html! { <span class="chip">{ item.clone() }</span> }) }
            </div>
        },
        FieldValue::Pairs(pairs) => html! {
            <ul class="pairs">
                { for pairs.iter().map(|pair| html! {
                    <li>
                        <strong>{ format!("{}: ", pair.label) }</strong>
                        { pair.value.clone() }
                    </li>
                }) }
            </ul>
        },
    }
}

fn build_fee_card(card: &CourseFeeCard) -> Html {
    let body = match card {
        CourseFeeCard::Simple(simple) => build_simple_card(simple),
        CourseFeeCard::Nested(nested) => build_nested_card(nested),
        CourseFeeCard::Rta(rta) => build_rta_card(rta),
        CourseFeeCard::Unknown(unknown) => build_unknown_card(unknown),
    };
    html! {
        <div class={classes!("fee-card", card.pattern().as_str())}>
            { body }
        </div>
    }
}

fn heading(title: Option<&str>) -> Html {
    match title {
        Some(title) => html! { <h4 class="fee-card-title">{ title.to_string() }</h4> },
        None => html! {},
    }
}

fn row(label: &str, value: Option<&str>) -> Html {
    match value {
        Some(value) => html! {
            <div class="fee-row">
                <span class="fee-label">{ label.to_string() }</span>
                <span class="fee-value">{ value.to_string() }</span>
            </div>
        },
        None => html! {},
    }
}

fn notes(notes: Option<&str>) -> Html {
    match notes {
        Some(notes) => html! { <p class="fee-notes">{ notes.to_string() }</p> },
        None => html! {},
    }
}

fn build_simple_card(card: &SimpleCard) -> Html {
    html! {
        <>
            { heading(card.category.as_deref()) }
            { row("Eligibility", card.eligibility.as_deref()) }
            { row("Hours", card.hours.as_deref()) }
            { row("Duration", card.duration.as_deref()) }
            { row("Normal Fee", card.normal_fee.as_deref()) }
            { row("Sunday Fee", card.sunday_fee.as_deref()) }
            { row("Shift Fee", card.shift_fee.as_deref()) }
            { build_fields(&card.extra) }
            { notes(card.notes.as_deref()) }
        </>
    }
}

fn build_fee_block(title: &str, block: Option<&FeeBlock>) -> Html {
    let Some(block) = block else {
        return html! {};
    };
    html! {
        <div class="fee-block">
            <h5>{ title.to_string() }</h5>
            { row("Hourly", block.hourly_display.as_deref()) }
            { for block.totals.iter().map(|total| row(&total.label, Some(total.display.as_str()))) }
            { build_fields(&block.extra) }
        </div>
    }
}

fn build_nested_card(card: &NestedCard) -> Html {
    html! {
        <>
            { heading(card.category.as_deref()) }
            { row("Min Age", card.min_age.as_deref()) }
            { row("Road Training", card.road_training.as_deref()) }
            { row("Internal Training", card.internal_training.as_deref()) }
            { row("Total Hours", card.total_hours.as_deref()) }
            { build_fee_block("Regular Course Fees", card.regular.as_ref()) }
            { build_fee_block("Sunday / Night Shift Fees", card.sunday_night_shift.as_ref()) }
            { build_fields(&card.extra) }
            { notes(card.notes.as_deref()) }
        </>
    }
}

fn build_rta_card(card: &RtaCard) -> Html {
    html! {
        <>
            { heading(card.category.as_deref()) }
            if !card.training_rates.is_empty() {
                <div class="fee-block">
                    <h5>{"Training Rates"}</h5>
                    { for card.training_rates.iter().map(|rate| row(&rate.label, Some(rate.value.as_str()))) }
                </div>
            }
            if !card.rta_fees.is_empty() {
                <div class="fee-block">
                    <h5>{"RTA Fees"}</h5>
                    { for card.rta_fees.iter().map(|fee| row(&fee.fee_type, Some(fee.display.as_str()))) }
                    { row("Total RTA Fees", Some(card.rta_total_display.as_str())) }
                </div>
            }
            { build_fields(&card.extra) }
            { notes(card.notes.as_deref()) }
        </>
    }
}

fn build_unknown_card(card: &UnknownCard) -> Html {
    html! {
        <>
            { build_fields(&card.fields) }
            <pre class="fee-raw">{ card.raw.clone() }</pre>
        </>
    }
}

fn build_other_fees(table: &OtherFeesTable) -> Html {
    html! {
        <section class="detail-section">
            <h3>{"Other Fees"}</h3>
            <table class="other-fees">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        { for table.headers.iter().map(|header| html! { <th>{ header.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|fee| html! {
                        <tr>
                            <td>{ fee.fee_type.clone() }</td>
                            { for fee.cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
