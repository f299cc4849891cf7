//! Review commands.
//!
//! # Usage
//!
//! ```bash
//! stylehub reviews add 42 --email ada@example.com --rating 5 --comment "Fits well"
//! stylehub reviews list 42
//! stylehub reviews update 7 --rating 4
//! stylehub reviews delete 7
//! ```

use stylehub_core::{NewReview, Review, ReviewStats, ReviewUpdate};
use stylehub_storefront::AppState;
use stylehub_storefront::reviews::ReviewGateway;

use super::{CommandError, ReviewAction};

/// Run a review subcommand.
pub async fn run(state: &AppState, action: ReviewAction, json: bool) -> Result<(), CommandError> {
    let reviews = state.reviews();
    match action {
        ReviewAction::List { product_id } => {
            let stats = reviews.stats(&product_id).await?;
            let list = reviews.for_product(&product_id).await?;
            if json {
                let out = serde_json::json!({ "stats": stats, "reviews": list });
                print_json(&out)
            } else {
                print_stats(&stats, false)?;
                print_reviews(&list, false)
            }
        }
        ReviewAction::Mine { email } => print_reviews(&reviews.by_user(&email).await?, json),
        ReviewAction::Add {
            product_id,
            email,
            rating,
            name,
            comment,
        } => {
            let mut review = NewReview::new(product_id, email, rating);
            review.user_name = name;
            review.comment = comment;
            let created = reviews.create(review).await?;
            print_reviews(&[created], json)
        }
        ReviewAction::Update {
            review_id,
            rating,
            comment,
        } => {
            let updated = reviews
                .update(review_id, ReviewUpdate { rating, comment })
                .await?;
            print_reviews(&[updated], json)
        }
        ReviewAction::Delete { review_id } => {
            let deleted = reviews.delete(review_id).await?;
            tracing::info!(review_id = %deleted.id, "Review deleted");
            Ok(())
        }
        ReviewAction::Stats { product_id } => print_stats(&reviews.stats(&product_id).await?, json),
    }
}

#[allow(clippy::print_stdout)]
fn print_json(value: &serde_json::Value) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_stats(stats: &ReviewStats, json: bool) -> Result<(), CommandError> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }
    println!(
        "Average: {} from {} reviews",
        stats.average_rating, stats.total_reviews
    );
    for (stars, count) in stats.breakdown_desc() {
        println!("  {stars} stars: {count}");
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_reviews(reviews: &[Review], json: bool) -> Result<(), CommandError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reviews)?);
        return Ok(());
    }
    if reviews.is_empty() {
        println!("No reviews");
        return Ok(());
    }
    for review in reviews {
        println!(
            "#{} [{}] {}/5 by {} on {}",
            review.id,
            review.product_id,
            review.rating.stars(),
            review.user_name,
            review.created_at.format("%Y-%m-%d"),
        );
        if !review.comment.is_empty() {
            println!("    {}", review.comment);
        }
    }
    Ok(())
}
