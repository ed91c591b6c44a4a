use sea_orm::Schema;
use sea_orm_migration::prelude::*;

use crate::entity::{
    cinema_hall, movie, movie_session, order, order_ticket, shopping_cart, shopping_cart_ticket,
    ticket, user,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Referenced tables first.
        manager
            .create_table(schema.create_table_from_entity(movie::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(cinema_hall::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(user::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(movie_session::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(ticket::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(shopping_cart::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(shopping_cart_ticket::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(order::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(order_ticket::Entity))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(order_ticket::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(order::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(shopping_cart_ticket::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(shopping_cart::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ticket::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(movie_session::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(user::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(cinema_hall::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(movie::Entity).to_owned())
            .await?;

        Ok(())
    }
}
