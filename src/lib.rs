// Copyright 2023 Remi Bernotavicius

pub mod database;
