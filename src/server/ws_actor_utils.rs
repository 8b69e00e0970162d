use actix_web_actors::ws;
use serde_json::Value;
use actix::ActorContext;

use crate::server::ws_error::ws_error_message;
use crate::server::anti_spam::AntiSpamState;

/// Shared helpers for WebSocket actors that answer clients directly.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn client_id(&self) -> String;

    /// Send a ban notice, close the socket and stop the actor.
    fn send_ban_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let context = serde_json::json!({
            "client_id": self.client_id(),
            "ban_remaining_secs": self.anti_spam().ban_remaining_secs(),
        });
        ctx.text(ws_error_message(
            "BANNED",
            "You have been banned for spamming. Please try again later.",
            Some(context),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    /// Send an error unless it repeats the previous one; ban on response flood.
    fn send_error_and_maybe_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let client_id = self.client_id();
        if self.anti_spam().should_send_error(code, &client_id) {
            if self.anti_spam().record_response(&client_id) {
                self.send_ban_and_close(ctx);
                return;
            }
            ctx.text(ws_error_message(code, message, context));
        }
    }
}
