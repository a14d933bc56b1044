use pretty_assertions::assert_eq;
use schemata_sql::stmt::{
    AlterStmt, ColumnDef, CreateStmt, DropStmt, Expr, Ident, InsertStmt, OnConflict, SelectStmt,
    Statement, TableDesc, Target, UpdateStmt, WithStmt,
};

fn users_body() -> Expr {
    Expr::table_body(vec![
        ColumnDef::new("id", "bigint").not_null(),
        ColumnDef::new("name", "text").default(Expr::value("anonymous")),
    ])
}

#[test]
fn create_table_if_not_exists_with_empty_body() {
    let stmt = CreateStmt {
        target: Target::Table,
        name: Ident::name("public.users"),
        create: Some(Expr::raw("")),
        if_not_exists: true,
    };

    assert_eq!(stmt.to_string(), "create table if not exists public.users");
}

#[test]
fn create_table_with_body() {
    let stmt = Statement::create(Target::Table, Ident::selector("public", "users"), users_body());

    assert_eq!(
        stmt.to_string(),
        "create table users (id bigint not null, name text default 'anonymous')"
    );
}

#[test]
fn create_table_with_foreign_key_constraint() {
    let body = schemata_sql::stmt::ExprTableBody::new(vec![
        ColumnDef::new("id", "bigint"),
        ColumnDef::new("user_id", "bigint"),
    ])
    .constraint(Expr::foreign_key(["user_id"], "public.users", ["id"]));

    let stmt = Statement::create(Target::Table, "public.posts", body);

    assert_eq!(
        stmt.to_string(),
        "create table public.posts (id bigint, user_id bigint, foreign key (user_id) references public.users (id))"
    );
}

#[test]
fn create_schema_without_body() {
    assert_eq!(Statement::create_schema("audit").to_string(), "create schema audit");
}

#[test]
fn create_constraint_renders_body_only() {
    let stmt = CreateStmt {
        target: Target::Constraint,
        name: Ident::name("public.fk_posts_users"),
        create: Some(Expr::raw("constraint fk_posts_users check (true)")),
        if_not_exists: true,
    };

    assert_eq!(stmt.to_string(), "create constraint fk_posts_users check (true)");
}

#[test]
fn create_with_qualified_column_type() {
    let stmt = Statement::create_table(
        "public.users",
        vec![ColumnDef::new("status", Ident::selector("public", "user_status"))],
    );

    assert_eq!(
        stmt.to_string(),
        "create table public.users (status public.user_status)"
    );
}

#[test]
fn alter_add_column() {
    let stmt = Statement::add_column("public.users", ColumnDef::new("email", "text").not_null());

    assert_eq!(
        stmt.to_string(),
        "alter table public.users add column email text not null"
    );
}

#[test]
fn alter_add_constraint() {
    let stmt = AlterStmt {
        target: Target::Table,
        name: Ident::name("public.posts"),
        alter: Expr::add_constraint(
            "fk_posts_users",
            Expr::foreign_key(["user_id"], "public.users", ["id"]),
        ),
    };

    assert_eq!(
        stmt.to_string(),
        "alter table public.posts add constraint fk_posts_users foreign key (user_id) references public.users (id)"
    );
}

#[test]
fn drop_statements() {
    let stmt = DropStmt {
        target: Target::Index,
        name: Ident::name("public.users_email_idx"),
    };
    assert_eq!(stmt.to_string(), "drop index public.users_email_idx");

    assert_eq!(
        Statement::drop(Target::Schema, "audit").to_string(),
        "drop schema audit"
    );
}

#[test]
fn insert_keeps_field_order() {
    let stmt = InsertStmt::new("public.users")
        .value("name", Expr::value("bob"))
        .value("id", Expr::value(1))
        .value("active", Expr::value(true));

    assert_eq!(
        stmt.to_string(),
        "insert into public.users (name, id, active) values ('bob', 1, true)"
    );
}

#[test]
fn insert_replacing_a_field_keeps_position() {
    let stmt = InsertStmt::new("public.users")
        .value("id", Expr::value(1))
        .value("name", Expr::value("bob"))
        .value("id", Expr::value(2));

    assert_eq!(
        stmt.to_string(),
        "insert into public.users (id, name) values (2, 'bob')"
    );
}

#[test]
fn insert_ignores_alias() {
    let stmt = InsertStmt::new(TableDesc::new("public.users").alias("u")).value("id", Expr::value(1));

    assert_eq!(stmt.to_string(), "insert into public.users (id) values (1)");
}

#[test]
fn insert_on_conflict() {
    let stmt = InsertStmt::new("public.users")
        .value("id", Expr::value(1))
        .value("name", Expr::value("o'brien"))
        .on_conflict(
            OnConflict::new(Expr::raw("(id)"))
                .set(Expr::assign("name", Expr::raw("excluded.name")))
                .set(Expr::assign("updated", Expr::value(true))),
        );

    assert_eq!(
        stmt.to_string(),
        "insert into public.users (id, name) values (1, 'o''brien') on conflict (id) do update set name = excluded.name, updated = true"
    );
}

#[test]
fn update_without_alias_or_filter() {
    let stmt = UpdateStmt::new("public.users").set(Expr::assign("active", Expr::value(false)));

    assert_eq!(
        stmt.to_string(),
        "update public.users set active = false where 1 = 1"
    );
}

#[test]
fn update_with_alias_and_compound_filter() {
    let stmt = UpdateStmt::new(TableDesc::new("public.users").alias("u"))
        .set(Expr::assign("active", Expr::value(false)))
        .set(Expr::assign("name", Expr::Value(Default::default())))
        .filter(Expr::and(
            Expr::eq(Expr::ident("u.id"), Expr::value(1)),
            Expr::or(
                Expr::is_null(Expr::ident("u.email")),
                Expr::gt(Expr::ident("u.age"), Expr::value(99)),
            ),
        ));

    assert_eq!(
        stmt.to_string(),
        "update public.users u set active = false, name = null where u.id = 1 and (u.email is null or u.age > 99)"
    );
}

#[test]
fn select_without_filter() {
    let stmt = SelectStmt::new(TableDesc::new("public.users").alias("u"))
        .column(Expr::ident("u.id"))
        .column(Expr::ident("u.name"));

    assert_eq!(
        stmt.to_string(),
        "select u.id, u.name from public.users u where 1 = 1"
    );
}

#[test]
fn with_wraps_select() {
    let with = SelectStmt::new("public.users")
        .column(Expr::ident("id"))
        .filter(Expr::ne(Expr::ident("name"), Expr::value("")));
    let select = SelectStmt::new("named").column(Expr::raw("count(*)"));

    let stmt = WithStmt::new("named", with, select);

    assert_eq!(
        stmt.to_string(),
        "with named as (select id from public.users where name <> '') select count(*) from named where 1 = 1"
    );
}

#[test]
fn sub_select_in_set_clause() {
    let stmt = UpdateStmt::new("public.stats").set(Expr::assign(
        "total",
        SelectStmt::new("public.users").column(Expr::raw("count(*)")),
    ));

    assert_eq!(
        stmt.to_string(),
        "update public.stats set total = (select count(*) from public.users where 1 = 1) where 1 = 1"
    );
}

#[test]
fn statement_enum_renders_like_variant() {
    let stmt = DropStmt {
        target: Target::Table,
        name: Ident::selector("public", "users"),
    };
    let expected = stmt.to_string();

    assert_eq!(expected, "drop table users");
    assert_eq!(Statement::from(stmt).to_string(), expected);
}

#[test]
fn selector_names_render_rightmost_component() {
    let alter = AlterStmt {
        target: Target::Table,
        name: Ident::selector("public", "users"),
        alter: Expr::raw("owner to x"),
    };
    assert_eq!(alter.to_string(), "alter table users owner to x");

    let insert = InsertStmt::new(Ident::selector("public", "users")).value("id", Expr::value(1));
    assert_eq!(insert.to_string(), "insert into users (id) values (1)");

    let update = UpdateStmt::new(TableDesc::new(Ident::selector("public", "users")).alias("u"))
        .set(Expr::assign("active", Expr::value(true)));
    assert_eq!(
        update.to_string(),
        "update users u set active = true where 1 = 1"
    );

    let select = SelectStmt::new(Ident::selector("public", "users")).column(Expr::raw("*"));
    assert_eq!(select.to_string(), "select * from users where 1 = 1");
}

#[test]
fn selector_inside_expression_renders_qualified() {
    let stmt = UpdateStmt::new("public.users")
        .set(Expr::assign("owner", Expr::ident(Ident::selector("u", "name"))));

    assert_eq!(
        stmt.to_string(),
        "update public.users set owner = u.name where 1 = 1"
    );
}
