//! Plain HTTP endpoints: game creation and catalog summary.

use actix_web::{web, Error, HttpResponse, error};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::assets::AssetProvider;
use crate::game::systems::cues::SoundEffect;
use crate::game::types::Category;
use crate::server::game_session::server::CreateGame;
use crate::server::state::AppState;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameCreated {
    pub game_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub label: String,
    pub name: String,
    pub image_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SoundSummary {
    pub effect: SoundEffect,
    pub src: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub categories: Vec<CategorySummary>,
    pub sounds: Vec<SoundSummary>,
}

impl CatalogSummary {
    pub fn build(assets: &dyn AssetProvider) -> Self {
        CatalogSummary {
            categories: Category::ALL
                .into_iter()
                .map(|category| CategorySummary {
                    label: category.label().to_string(),
                    name: assets.display_name(category),
                    image_count: assets.images(category).len(),
                })
                .collect(),
            sounds: [SoundEffect::BackgroundLoop, SoundEffect::Correct, SoundEffect::Incorrect]
                .into_iter()
                .map(|effect| SoundSummary { effect, src: assets.sound(effect) })
                .collect(),
        }
    }
}

/// `POST /api/games`: open a new session and return its id.
pub async fn create_game(data: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let game_id = data
        .game_session_manager
        .send(CreateGame)
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Created().json(GameCreated { game_id }))
}

/// `GET /api/catalog`: what the front end can expect to display and play.
pub async fn catalog(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CatalogSummary::build(data.assets.as_ref()))
}
