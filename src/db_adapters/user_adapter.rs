use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set,
};
use uuid::Uuid;

use crate::entities::user::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_is_active(self, is_active: bool) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_is_active(mut self, is_active: bool) -> Self {
        self.query = self.query.filter(Column::IsActive.eq(is_active));
        self
    }
}

pub trait UserQuery {
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_username(
        self,
        username: &str,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email_iexact(
        self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_username(self, username: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Username.eq(username))
            .one(self.db)
            .await
    }

    async fn get_by_email_iexact(self, email: &str) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(
                Expr::expr(Func::lower(Expr::col((Entity, Column::Email))))
                    .eq(Func::lower(Expr::val(email))),
            )
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

pub trait UserMutation {
    fn create(self, params: CreateUserParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn activate(self, user: Model) -> impl Future<Output = Result<Model, DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    async fn create(self, params: CreateUserParams) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            username: Set(params.username),
            email: Set(params.email),
            password: Set(params.password),
            is_active: Set(params.is_active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn activate(self, user: Model) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.is_active = Set(true);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }
}
