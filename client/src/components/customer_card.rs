//! One customer on the Customers page.

use leptos::prelude::*;
use shop::Customer;
use shop::format::{dollars, short_date};

#[component]
pub fn CustomerCard(customer: Customer) -> impl IntoView {
    let tier = customer.value_tier();
    let tier_class = format!("badge badge--tier badge--{}", tier.css_modifier());
    let initials = customer.initials();
    let name = customer.full_name();
    let spent = dollars(customer.total_spent_cents);
    let last_visit = short_date(customer.last_visit);

    let phone = customer
        .phone
        .map(|phone| view! { <p class="customer-card__contact">{phone}</p> });
    let email = customer
        .email
        .map(|email| view! { <p class="customer-card__contact">{email}</p> });

    let scooters = customer
        .scooters
        .into_iter()
        .map(|scooter| {
            let serviced = format!("Last service: {}", short_date(scooter.last_service));
            view! {
                <li class="customer-card__scooter">
                    <span class="customer-card__scooter-model">{scooter.model}</span>
                    <span class="customer-card__scooter-service">{serviced}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <article class="customer-card">
            <div class="customer-card__header">
                <span class="customer-card__avatar">{initials}</span>
                <div>
                    <h3 class="customer-card__name">{name}</h3>
                    <span class=tier_class>{tier.label()}</span>
                </div>
            </div>

            <p class="customer-card__location">{customer.location}</p>
            {phone}
            {email}

            <dl class="customer-card__stats">
                <div><dt>"Jobs"</dt><dd>{customer.total_jobs}</dd></div>
                <div><dt>"Spent"</dt><dd>{spent}</dd></div>
                <div><dt>"Last visit"</dt><dd>{last_visit}</dd></div>
            </dl>

            <ul class="customer-card__scooters">{scooters}</ul>
        </article>
    }
}
