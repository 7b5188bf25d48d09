use crate::config::{Config, Relation};
use crate::expand::SUPPORT_TYPES;
use crate::relation::Accessors;
use crate::schema::{Model, Name, ValueType};
use crate::{Error, Result};

use heck::{ToSnakeCase, ToUpperCamelCase};
use indexmap::{IndexMap, IndexSet};

/// Functions every generated table module defines.
const MODULE_FNS: &[&str] = &[
    "select",
    "order_by",
    "limit",
    "and",
    "or",
    "not",
    "with_inner_join",
    "union_all",
    "union_distinct",
];

/// Files of the generated root module.
const RESERVED_MODULES: &[&str] = &["mod", "tables"];

/// Checks that only need the config itself: unique table names, table names
/// that shadow no support type, and junction arity. Runs before any model
/// source is read.
pub(crate) fn check_config(config: &Config) -> Result<()> {
    let mut seen = IndexSet::new();

    let schemas = config
        .tables
        .iter()
        .map(|table| &table.schema)
        .chain(config.junctions.iter().map(|junction| &junction.schema));

    for schema in schemas {
        let module = schema.model.to_snake_case();

        if RESERVED_MODULES.contains(&module.as_str()) {
            return Err(Error::ConflictingName {
                table: schema.model.clone(),
                name: module,
            });
        }

        let marker = schema.model.to_upper_camel_case();

        if SUPPORT_TYPES.contains(&marker.as_str()) {
            return Err(Error::ConflictingName {
                table: schema.model.clone(),
                name: marker,
            });
        }

        // `User` and `user` would both generate `user.rs`
        if !seen.insert(module) {
            return Err(Error::DuplicateTable(schema.model.clone()));
        }
    }

    for junction in &config.junctions {
        if junction.relations.len() != 2 {
            return Err(Error::JunctionArity {
                table: junction.schema.model.clone(),
                count: junction.relations.len(),
            });
        }
    }

    Ok(())
}

/// Checks every relation against the resolved models: the target must be a
/// declared table and both keys must name a column.
pub(crate) fn check_relations(config: &Config, models: &IndexMap<String, Model>) -> Result<()> {
    let declared = config
        .tables
        .iter()
        .map(|table| (&table.schema.model, &table.relations));

    let junctions = config
        .junctions
        .iter()
        .map(|junction| (&junction.schema.model, &junction.relations));

    for (model, relations) in declared.chain(junctions) {
        for relation in relations {
            check_relation(config, models, model, relation)?;
        }
    }

    Ok(())
}

fn check_relation(
    config: &Config,
    models: &IndexMap<String, Model>,
    model: &str,
    relation: &Relation,
) -> Result<()> {
    let is_table = config
        .tables
        .iter()
        .any(|table| table.schema.model == relation.target);

    let target = match models.get(&relation.target) {
        Some(target) if is_table => target,
        _ => {
            return Err(Error::UnknownTarget {
                table: model.to_owned(),
                relation: relation.name.clone(),
                target: relation.target.clone(),
            })
        }
    };

    let unknown_key = |owner: &str, key: &str| Error::UnknownKey {
        table: model.to_owned(),
        relation: relation.name.clone(),
        owner: owner.to_owned(),
        key: key.to_owned(),
    };

    if models[model].column(&relation.from).is_none() {
        return Err(unknown_key(model, &relation.from));
    }

    if target.column(&relation.to).is_none() {
        return Err(unknown_key(&relation.target, &relation.to));
    }

    Ok(())
}

/// Checks that the constants and functions generated for each table have
/// distinct names.
pub(crate) fn check_names(models: &IndexMap<String, Model>, accessors: &Accessors) -> Result<()> {
    for (key, model) in models {
        let mut constants = IndexSet::new();

        // Columns skipped by the generator cannot clash
        let generated = model
            .columns
            .iter()
            .filter(|column| ValueType::from_tag(&column.ty).is_some())
            .filter_map(|column| Name::new(&column.field).ok());

        for name in generated {
            let constant = name.constant.to_string();

            if !constants.insert(constant.clone()) {
                return Err(Error::ConflictingName {
                    table: key.clone(),
                    name: constant,
                });
            }
        }
    }

    for (model, accessors) in accessors {
        let mut names: IndexSet<String> = MODULE_FNS.iter().map(|name| name.to_string()).collect();

        for accessor in accessors {
            let name = &accessor.name.snake;

            for f in [name.clone(), format!("load_{name}"), format!("has_{name}")] {
                if !names.insert(f.clone()) {
                    return Err(Error::ConflictingName {
                        table: model.clone(),
                        name: f,
                    });
                }
            }
        }
    }

    Ok(())
}
