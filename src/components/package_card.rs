use leptos::prelude::*;

use crate::models::{Course, GolfPackage, PartySize};

fn count_label(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[component]
pub fn PackageCard(
    package: GolfPackage,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = package.id;
    let price_label = package.price.to_string();
    let rounds = count_label(package.number_of_rounds, "round", "rounds");
    let nights = count_label(package.number_of_nights, "night", "nights");
    let party = match package.party_size {
        PartySize::Any => None,
        size => Some(format!("Priced for {}", size)),
    };

    let image = (!package.image_url.is_empty()).then(|| {
        view! {
            <img
                class="package-image"
                src=package.image_url.clone()
                alt=package.name.clone()
                loading="lazy"
            />
        }
    });

    let details = package.clone();

    view! {
        <article class="package-card" class:expanded=move || expanded.get()>
            {image}

            <div class="package-card-header">
                <div class="package-card-title">
                    <span class="package-name">{package.name.clone()}</span>
                    <span class="package-location">{package.location.clone()}</span>
                </div>
                <span class="package-price">{price_label}</span>
            </div>

            <div class="package-summary">
                <span class="summary-chip">{rounds}</span>
                <span class="summary-chip">{nights}</span>
                {party.map(|p| view! { <span class="summary-chip">{p}</span> })}
            </div>

            <button
                class="btn btn-secondary package-toggle"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| on_toggle.run(id)
            >
                {move || if expanded.get() { "Hide details" } else { "Show details" }}
            </button>

            <Show when=move || expanded.get()>
                <PackageDetails package=details.clone() />
            </Show>
        </article>
    }
}

/// Secondary information shown when a card is expanded.
#[component]
fn PackageDetails(package: GolfPackage) -> impl IntoView {
    let website = package.website.clone();
    let has_website = website.starts_with("http");

    let perks = (!package.perks.is_empty()).then(|| {
        let items: Vec<_> = package
            .perks
            .iter()
            .map(|perk| view! { <li class="perk">{perk.clone()}</li> })
            .collect();
        view! {
            <div class="package-perks">
                <h4>"Perks"</h4>
                <ul>{items}</ul>
            </div>
        }
    });

    let courses = (!package.courses.is_empty()).then(|| {
        let rows: Vec<_> = package.courses.iter().map(course_row).collect();
        view! {
            <div class="package-courses">
                <h4>"Courses"</h4>
                <table class="course-table">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Holes"</th>
                            <th>"Par"</th>
                            <th>"Length"</th>
                            <th>"Rating"</th>
                            <th>"Slope"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
    });

    view! {
        <div class="package-details">
            {(!package.description.is_empty())
                .then(|| view! { <p class="package-description">{package.description.clone()}</p> })}
            {perks}
            {courses}
            {has_website.then(|| view! {
                <a href=website target="_blank" rel="noopener noreferrer" class="source-link">
                    "Visit Website"
                </a>
            })}
        </div>
    }
}

fn course_row(course: &Course) -> impl IntoView {
    view! {
        <tr>
            <td>{course.name.clone()}</td>
            <td>{course.holes.to_string()}</td>
            <td>{course.par.to_string()}</td>
            <td>{format!("{} yds", course.length)}</td>
            <td>{format!("{:.1}", course.rating)}</td>
            <td>{course.slope.to_string()}</td>
        </tr>
    }
}
