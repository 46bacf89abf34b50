use crate::error::BattleBoardError;
use actix_web::HttpRequest;
use battleboard_domain::{User, ID};
use battleboard_infra::BattleBoardContext;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,    // Subject (whom token refers to)
    email: String, // Email of the subject when the token was issued
    exp: i64,      // Expiration time (as UTC timestamp in seconds)
    iat: i64,      // Issued at (as UTC timestamp in seconds)
}

/// Claims of the short lived token handed out once an email address is verified
#[derive(Debug, Serialize, Deserialize)]
struct VerificationClaims {
    email: String,
    scope: String,
    exp: i64,
    iat: i64,
}

const EMAIL_VERIFICATION_SCOPE: &str = "email_verification";

/// Issues a signed token for the `User` that expires after the configured lifetime
pub fn create_token(user: &User, ctx: &BattleBoardContext) -> anyhow::Result<String> {
    let iat = ctx.sys.get_timestamp_millis() / 1000;
    let claims = Claims {
        id: user.id.as_string(),
        email: user.email.clone(),
        iat,
        exp: iat + ctx.config.token_lifetime_secs,
    };
    let enc_key = EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &enc_key)?;
    Ok(token)
}

fn decode_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))?.claims;

    Ok(claims)
}

/// Issues a token proving that the owner of `email` could read a one time password
pub fn create_verification_token(
    email: &str,
    ctx: &BattleBoardContext,
) -> anyhow::Result<String> {
    let iat = ctx.sys.get_timestamp_millis() / 1000;
    let claims = VerificationClaims {
        email: email.to_string(),
        scope: EMAIL_VERIFICATION_SCOPE.into(),
        iat,
        exp: iat + ctx.config.verification_token_lifetime_secs,
    };
    let enc_key = EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &enc_key)?;
    Ok(token)
}

fn decode_verification_token(token: &str, secret: &str) -> anyhow::Result<VerificationClaims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<VerificationClaims>(
        token,
        &decoding_key,
        &Validation::new(Algorithm::HS256),
    )?
    .claims;
    if claims.scope != EMAIL_VERIFICATION_SCOPE {
        return Err(anyhow::Error::msg("Token was not issued for email verification"));
    }

    Ok(claims)
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .trim_start_matches("Bearer")
        .trim_start_matches("bearer")
        .trim()
        .to_string()
}

async fn auth_user_req(req: &HttpRequest, ctx: &BattleBoardContext) -> Option<User> {
    let token = req.headers().get("authorization")?;
    let token = parse_authtoken_header(token.to_str().ok()?);
    let claims = decode_token(&token, &ctx.config.jwt_secret).ok()?;
    let user_id = claims.id.parse::<ID>().ok()?;

    ctx.repos.users.find(&user_id).await
}

/// Finds the `User` making the request from the bearer token in the
/// `authorization` header
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &BattleBoardContext,
) -> Result<User, BattleBoardError> {
    match auth_user_req(req, ctx).await {
        Some(user) => Ok(user),
        None => Err(BattleBoardError::Unauthorized(
            "Unable to find user from credentials".into(),
        )),
    }
}

/// Finds the verified email from the bearer token in the `authorization` header
pub fn protect_verified_email(
    req: &HttpRequest,
    ctx: &BattleBoardContext,
) -> Result<String, BattleBoardError> {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|token| token.to_str().ok())
        .map(parse_authtoken_header)
        .ok_or_else(|| BattleBoardError::Unauthorized("No token provided".into()))?;

    decode_verification_token(&token, &ctx.config.jwt_secret)
        .map(|claims| claims.email)
        .map_err(|_| BattleBoardError::Unauthorized("Invalid or expired token".into()))
}
