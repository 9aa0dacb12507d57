use serde_json::Value;
use tut_core::entities::NewTutorial;
use tut_core::responses::{DeleteResponse, ExistsResponse};
use tut_db::repos::tutorial::TutorialFilter;
use tut_db::updates::tutorial::TutorialUpdate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CreateArgs, FilterArgs, UpdateArgs};
use crate::context::AppContext;

fn to_filter(args: &FilterArgs) -> TutorialFilter {
    TutorialFilter {
        id: args.id,
        title: args.title.clone(),
        tutorial_url: args.url.clone(),
        description: args.description.clone(),
        published: args.published,
        limit: None,
    }
}

pub async fn create(args: &CreateArgs, ctx: &AppContext) -> anyhow::Result<Value> {
    let new = NewTutorial::new(&args.title, &args.url, &args.description).published(args.published);
    let tutorial = ctx.service.create_tutorial(&new).await?;
    Ok(serde_json::to_value(tutorial)?)
}

pub async fn get(id: i64, ctx: &AppContext) -> anyhow::Result<Value> {
    let tutorial = ctx.service.get_tutorial(id).await?;
    Ok(serde_json::to_value(tutorial)?)
}

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Value> {
    let tutorials = ctx.service.list_tutorials(ctx.limit(flags.limit)).await?;
    Ok(serde_json::to_value(tutorials)?)
}

pub async fn find(
    args: &FilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Value> {
    let filter = to_filter(args).limit(ctx.limit(flags.limit));
    let tutorials = ctx.service.filter_tutorials(&filter).await?;
    Ok(serde_json::to_value(tutorials)?)
}

pub async fn exists(args: &FilterArgs, ctx: &AppContext) -> anyhow::Result<Value> {
    let filter = to_filter(args);
    let count = ctx.service.count_tutorials(&filter).await?;
    Ok(serde_json::to_value(ExistsResponse {
        exists: count > 0,
        count,
    })?)
}

pub async fn update(args: &UpdateArgs, ctx: &AppContext) -> anyhow::Result<Value> {
    let update = TutorialUpdate {
        title: args.title.clone(),
        tutorial_url: args.url.clone(),
        description: args.description.clone(),
        published: args.published,
    };
    let tutorial = ctx.service.update_tutorial(args.id, update).await?;
    Ok(serde_json::to_value(tutorial)?)
}

pub async fn delete(id: i64, ctx: &AppContext) -> anyhow::Result<Value> {
    ctx.service.delete_tutorial(id).await?;
    Ok(serde_json::to_value(DeleteResponse { id, deleted: true })?)
}
