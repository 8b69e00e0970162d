//! WebSocket bridge between one browser tab and its GameSession.

use actix::{Actor, ActorContext, Addr, AsyncContext, Handler, StreamHandler};
use actix_web::{HttpRequest, HttpResponse, web, Error, error};
use actix_web::http::StatusCode;
use actix_web_actors::ws;
use log::{debug, error};
use uuid::Uuid;

use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::messages::{ClientAction, GameStateUpdate, ProcessClientMessage};
use crate::server::game_session::server::{GameSession, GetGameSession, RegisterSession, UnregisterSession};
use crate::server::state::AppState;
use crate::server::ws_actor_utils::WsActorUtils;
use crate::server::ws_error::{http_error_response, ws_error_message};

pub struct GameSessionActor {
    pub game_id: Uuid,
    pub client_id: Uuid,
    pub session_addr: Addr<GameSession>,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(game_id: Uuid, session_addr: Addr<GameSession>) -> Self {
        Self {
            game_id,
            client_id: Uuid::new_v4(),
            session_addr,
            anti_spam: AntiSpamState::new(),
        }
    }
}

impl WsActorUtils for GameSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn client_id(&self) -> String {
        self.client_id.to_string()
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterSession {
            client_id: self.client_id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(UnregisterSession {
            client_id: self.client_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let client_id = self.client_id();
                if self.anti_spam.record_request(&client_id) {
                    self.send_ban_and_close(ctx);
                    return;
                }
                let action: ClientAction = match serde_json::from_str(&text) {
                    Ok(action) => action,
                    Err(e) => {
                        debug!("[GameClient] Invalid action from {}: {}", client_id, e);
                        self.send_error_and_maybe_ban(
                            ctx,
                            "INVALID_ACTION",
                            "Invalid game action",
                            Some(serde_json::json!({ "game_id": self.game_id })),
                        );
                        return;
                    }
                };
                self.anti_spam.reset_on_valid_action();
                self.session_addr.do_send(ProcessClientMessage {
                    msg: action,
                    client_id: self.client_id,
                });
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                debug!("[GameClient] Protocol error on {}: {}", self.client_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<GameStateUpdate> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: GameStateUpdate, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[GameClient] Failed to serialize state update: {}", e);
                ctx.text(ws_error_message(
                    "SERIALIZATION_FAILED",
                    "Failed to serialize game state",
                    None,
                ));
            }
        }
    }
}

/// WebSocket endpoint for an existing game: `/ws/game/{game_id}`.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let raw_id = path.into_inner();
    let game_id = match Uuid::parse_str(&raw_id) {
        Ok(id) => id,
        Err(_) => {
            return Ok(http_error_response(
                "INVALID_GAME_ID",
                "Game id is not a valid UUID",
                Some(&raw_id),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    let session_addr = match data
        .game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
    {
        Ok(addr) => addr,
        Err(message) => {
            return Ok(http_error_response(
                "GAME_NOT_FOUND",
                &message,
                Some(&raw_id),
                StatusCode::NOT_FOUND,
            ));
        }
    };

    ws::start(GameSessionActor::new(game_id, session_addr), &req, stream)
}
