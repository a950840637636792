//! Default block colors. Blocks not listed keep the host's native color;
//! `0x000000` hides a block.

pub(crate) const BLOCK_COLORS: &[(&str, u32)] = &[
    ("minecraft:acacia_button", 0x000000),
    ("minecraft:acacia_door", 0xA85F3D),
    ("minecraft:acacia_fence", 0xA85A32),
    ("minecraft:acacia_fence_gate", 0xA85A32),
    ("minecraft:acacia_leaves", 0x5C5618),
    ("minecraft:acacia_log", 0x676157),
    ("minecraft:acacia_planks", 0xA85A32),
    ("minecraft:acacia_pressure_plate", 0xA85A32),
    ("minecraft:acacia_sapling", 0x777618),
    ("minecraft:acacia_sign", 0xA85A32),
    ("minecraft:acacia_slab", 0xA85A32),
    ("minecraft:acacia_stairs", 0xA85A32),
    ("minecraft:acacia_trapdoor", 0x9F5934),
    ("minecraft:acacia_wall_sign", 0xA85A32),
    ("minecraft:acacia_wood", 0x676157),
    ("minecraft:activator_rail", 0x725446),
    ("minecraft:allium", 0xA089B9),
    ("minecraft:amethyst_block", 0x8662BF),
    ("minecraft:amethyst_cluster", 0xA47FCF),
    ("minecraft:ancient_debris", 0x5E4139),
    ("minecraft:andesite", 0x888889),
    ("minecraft:andesite_slab", 0x888889),
    ("minecraft:andesite_stairs", 0x888889),
    ("minecraft:andesite_wall", 0x888889),
    ("minecraft:anvil", 0x494949),
    ("minecraft:attached_melon_stem", 0xE0C71C),
    ("minecraft:attached_pumpkin_stem", 0xE0C71C),
    ("minecraft:azalea", 0x667D30),
    ("minecraft:azure_bluet", 0xACCE82),
    ("minecraft:bamboo", 0x5D9013),
    ("minecraft:bamboo_sapling", 0x5D9013),
    ("minecraft:barrel", 0x87653B),
    ("minecraft:barrier", 0x000000),
    ("minecraft:basalt", 0x515156),
    ("minecraft:beacon", 0x74DED8),
    ("minecraft:bedrock", 0x565656),
    ("minecraft:bee_nest", 0xCEA44D),
    ("minecraft:beehive", 0xB4915A),
    ("minecraft:beetroots", 0x007C00),
    ("minecraft:bell", 0xFDEB6E),
    ("minecraft:big_dripleaf", 0x729034),
    ("minecraft:big_dripleaf_stem", 0x5C742E),
    ("minecraft:birch_button", 0x000000),
    ("minecraft:birch_door", 0xE0D6B7),
    ("minecraft:birch_fence", 0xC0AF79),
    ("minecraft:birch_fence_gate", 0xC0AF79),
    ("minecraft:birch_leaves", 0x668644),
    ("minecraft:birch_log", 0xDBDAD5),
    ("minecraft:birch_planks", 0xC0AF79),
    ("minecraft:birch_pressure_plate", 0xC0AF79),
    ("minecraft:birch_sapling", 0x81A251),
    ("minecraft:birch_sign", 0xC0AF79),
    ("minecraft:birch_slab", 0xC0AF79),
    ("minecraft:birch_stairs", 0xC0AF79),
    ("minecraft:birch_trapdoor", 0xD4C9A6),
    ("minecraft:birch_wall_sign", 0xC0AF79),
    ("minecraft:birch_wood", 0xDBDAD5),
    ("minecraft:black_banner", 0x000000),
    ("minecraft:black_bed", 0x15151A),
    ("minecraft:black_candle", 0x28263C),
    ("minecraft:black_candle_cake", 0x28263C),
    ("minecraft:black_carpet", 0x15151A),
    ("minecraft:black_concrete", 0x080A0F),
    ("minecraft:black_concrete_powder", 0x191B20),
    ("minecraft:black_glazed_terracotta", 0x451E20),
    ("minecraft:black_shulker_box", 0x1A1A1E),
    ("minecraft:black_stained_glass", 0x191919),
    ("minecraft:black_stained_glass_pane", 0x191919),
    ("minecraft:black_terracotta", 0x251710),
    ("minecraft:black_wall_banner", 0x000000),
    ("minecraft:black_wool", 0x15151A),
    ("minecraft:blackstone", 0x2A242A),
    ("minecraft:blackstone_slab", 0x2A242A),
    ("minecraft:blackstone_stairs", 0x2A242A),
    ("minecraft:blackstone_wall", 0x2A242A),
    ("minecraft:blast_furnace", 0x4F4E4F),
    ("minecraft:blue_banner", 0x000000),
    ("minecraft:blue_bed", 0x35399D),
    ("minecraft:blue_candle", 0x3A4DA2),
    ("minecraft:blue_candle_cake", 0x3A4DA2),
    ("minecraft:blue_carpet", 0x35399D),
    ("minecraft:blue_concrete", 0x2D2F8F),
    ("minecraft:blue_concrete_powder", 0x4649A7),
    ("minecraft:blue_glazed_terracotta", 0x304490),
    ("minecraft:blue_ice", 0x74A8FD),
    ("minecraft:blue_orchid", 0x30A3AA),
    ("minecraft:blue_shulker_box", 0x2D2F8E),
    ("minecraft:blue_stained_glass", 0x334CB2),
    ("minecraft:blue_stained_glass_pane", 0x334CB2),
    ("minecraft:blue_terracotta", 0x4A3C5B),
    ("minecraft:blue_wall_banner", 0x000000),
    ("minecraft:blue_wool", 0x35399D),
    ("minecraft:bone_block", 0xD0CCB1),
    ("minecraft:bookshelf", 0x735D3A),
    ("minecraft:brain_coral", 0xC65598),
    ("minecraft:brain_coral_block", 0xD05CA0),
    ("minecraft:brain_coral_fan", 0xCC559B),
    ("minecraft:brain_coral_wall_fan", 0xCC559B),
    ("minecraft:brewing_stand", 0x7A654F),
    ("minecraft:brick_slab", 0x976153),
    ("minecraft:brick_stairs", 0x976153),
    ("minecraft:brick_wall", 0x976153),
    ("minecraft:bricks", 0x976153),
    ("minecraft:brown_banner", 0x000000),
    ("minecraft:brown_bed", 0x724829),
    ("minecraft:brown_candle", 0x71472A),
    ("minecraft:brown_candle_cake", 0x71472A),
    ("minecraft:brown_carpet", 0x724829),
    ("minecraft:brown_concrete", 0x603C20),
    ("minecraft:brown_concrete_powder", 0x7E5536),
    ("minecraft:brown_glazed_terracotta", 0x7D6A53),
    ("minecraft:brown_mushroom", 0x9A755C),
    ("minecraft:brown_mushroom_block", 0x957051),
    ("minecraft:brown_shulker_box", 0x6C4325),
    ("minecraft:brown_stained_glass", 0x664C33),
    ("minecraft:brown_stained_glass_pane", 0x664C33),
    ("minecraft:brown_terracotta", 0x4D3324),
    ("minecraft:brown_wall_banner", 0x000000),
    ("minecraft:brown_wool", 0x724829),
    ("minecraft:bubble_column", 0x4040FF),
    ("minecraft:bubble_coral", 0xA0179E),
    ("minecraft:bubble_coral_block", 0xA61BA3),
    ("minecraft:bubble_coral_fan", 0xA121A0),
    ("minecraft:bubble_coral_wall_fan", 0xA121A0),
    ("minecraft:budding_amethyst", 0x8560BA),
    ("minecraft:cactus", 0x58822D),
    ("minecraft:cake", 0xF7DBD4),
    ("minecraft:calcite", 0xE0E1DD),
    ("minecraft:campfire", 0xDCA03C),
    ("minecraft:candle", 0xE9CB9B),
    ("minecraft:candle_cake", 0xF7DBD4),
    ("minecraft:carrots", 0x367A28),
    ("minecraft:cartography_table", 0x6D5D47),
    ("minecraft:carved_pumpkin", 0x915111),
    ("minecraft:cauldron", 0x4A494A),
    ("minecraft:cave_air", 0x000000),
    ("minecraft:cave_vines", 0x5A6D29),
    ("minecraft:cave_vines_plant", 0x596626),
    ("minecraft:chain", 0x333A4A),
    ("minecraft:chain_command_block", 0x86A497),
    ("minecraft:chest", 0x866025),
    ("minecraft:chipped_anvil", 0x494949),
    ("minecraft:chiseled_deepslate", 0x373738),
    ("minecraft:chiseled_nether_bricks", 0x30181C),
    ("minecraft:chiseled_polished_blackstone", 0x363139),
    ("minecraft:chiseled_quartz_block", 0xE8E3DA),
    ("minecraft:chiseled_red_sandstone", 0xB7601B),
    ("minecraft:chiseled_sandstone", 0xD8CB9B),
    ("minecraft:chiseled_stone_bricks", 0x787778),
    ("minecraft:chorus_flower", 0xA184A1),
    ("minecraft:chorus_plant", 0x5D395D),
    ("minecraft:clay", 0xA1A6B3),
    ("minecraft:coal_block", 0x101010),
    ("minecraft:coal_ore", 0x686867),
    ("minecraft:coarse_dirt", 0x77553B),
    ("minecraft:cobbled_deepslate", 0x4D4D50),
    ("minecraft:cobbled_deepslate_slab", 0x4D4D50),
    ("minecraft:cobbled_deepslate_stairs", 0x4D4D50),
    ("minecraft:cobbled_deepslate_wall", 0x4D4D50),
    ("minecraft:cobblestone", 0x807F7F),
    ("minecraft:cobblestone_slab", 0x807F7F),
    ("minecraft:cobblestone_stairs", 0x807F7F),
    ("minecraft:cobblestone_wall", 0x807F7F),
    ("minecraft:cobweb", 0xE6EAEB),
    ("minecraft:command_block", 0xAD846E),
    ("minecraft:comparator", 0xA9A3A0),
    ("minecraft:composter", 0x976233),
    ("minecraft:conduit", 0x9F8B71),
    ("minecraft:copper_block", 0xC06C50),
    ("minecraft:copper_ore", 0x7D7D77),
    ("minecraft:cornflower", 0x507896),
    ("minecraft:cracked_deepslate_bricks", 0x414041),
    ("minecraft:cracked_deepslate_tiles", 0x353535),
    ("minecraft:cracked_nether_bricks", 0x281418),
    ("minecraft:cracked_polished_blackstone_bricks", 0x2C262C),
    ("minecraft:cracked_stone_bricks", 0x767676),
    ("minecraft:crafting_table", 0x7B4B2B),
    ("minecraft:creeper_head", 0x74AE6E),
    ("minecraft:creeper_wall_head", 0x74AE6E),
    ("minecraft:crimson_button", 0x000000),
    ("minecraft:crimson_door", 0x72374F),
    ("minecraft:crimson_fence", 0x653147),
    ("minecraft:crimson_fence_gate", 0x653147),
    ("minecraft:crimson_fungus", 0x8F2C1D),
    ("minecraft:crimson_hyphae", 0x5D1A1E),
    ("minecraft:crimson_nylium", 0x832020),
    ("minecraft:crimson_planks", 0x653147),
    ("minecraft:crimson_pressure_plate", 0x653147),
    ("minecraft:crimson_roots", 0x7F082A),
    ("minecraft:crimson_sign", 0x653147),
    ("minecraft:crimson_slab", 0x653147),
    ("minecraft:crimson_stairs", 0x653147),
    ("minecraft:crimson_stem", 0x5D1A1E),
    ("minecraft:crimson_trapdoor", 0x693349),
    ("minecraft:crimson_wall_sign", 0x653147),
    ("minecraft:crying_obsidian", 0x220A3F),
    ("minecraft:cut_copper", 0xBF6B51),
    ("minecraft:cut_copper_slab", 0xBF6B51),
    ("minecraft:cut_copper_stairs", 0xBF6B51),
    ("minecraft:cut_red_sandstone", 0xBE6620),
    ("minecraft:cut_red_sandstone_slab", 0xBE6620),
    ("minecraft:cut_sandstone", 0xDACFA0),
    ("minecraft:cut_sandstone_slab", 0xDACFA0),
    ("minecraft:cyan_banner", 0x000000),
    ("minecraft:cyan_bed", 0x158A91),
    ("minecraft:cyan_candle", 0x117E7E),
    ("minecraft:cyan_candle_cake", 0x117E7E),
    ("minecraft:cyan_carpet", 0x158A91),
    ("minecraft:cyan_concrete", 0x157788),
    ("minecraft:cyan_concrete_powder", 0x25949D),
    ("minecraft:cyan_glazed_terracotta", 0x34747B),
    ("minecraft:cyan_shulker_box", 0x157B89),
    ("minecraft:cyan_stained_glass", 0x4C7F99),
    ("minecraft:cyan_stained_glass_pane", 0x4C7F99),
    ("minecraft:cyan_terracotta", 0x575B5B),
    ("minecraft:cyan_wall_banner", 0x000000),
    ("minecraft:cyan_wool", 0x158A91),
    ("minecraft:damaged_anvil", 0x494949),
    ("minecraft:dandelion", 0x9EB02E),
    ("minecraft:dark_oak_button", 0x000000),
    ("minecraft:dark_oak_door", 0x4C3319),
    ("minecraft:dark_oak_fence", 0x432B14),
    ("minecraft:dark_oak_fence_gate", 0x432B14),
    ("minecraft:dark_oak_leaves", 0x22570C),
    ("minecraft:dark_oak_log", 0x3C2F1A),
    ("minecraft:dark_oak_planks", 0x432B14),
    ("minecraft:dark_oak_pressure_plate", 0x432B14),
    ("minecraft:dark_oak_sapling", 0x3C5B1E),
    ("minecraft:dark_oak_sign", 0x432B14),
    ("minecraft:dark_oak_slab", 0x432B14),
    ("minecraft:dark_oak_stairs", 0x432B14),
    ("minecraft:dark_oak_trapdoor", 0x4B3217),
    ("minecraft:dark_oak_wall_sign", 0x432B14),
    ("minecraft:dark_oak_wood", 0x3C2F1A),
    ("minecraft:dark_prismarine", 0x345C4C),
    ("minecraft:dark_prismarine_slab", 0x345C4C),
    ("minecraft:dark_prismarine_stairs", 0x345C4C),
    ("minecraft:daylight_detector", 0x867862),
    ("minecraft:dead_brain_coral", 0x867D79),
    ("minecraft:dead_brain_coral_block", 0x7D7673),
    ("minecraft:dead_brain_coral_fan", 0x867E7A),
    ("minecraft:dead_brain_coral_wall_fan", 0x867E7A),
    ("minecraft:dead_bubble_coral", 0x847C78),
    ("minecraft:dead_bubble_coral_block", 0x847C78),
    ("minecraft:dead_bubble_coral_fan", 0x8D8783),
    ("minecraft:dead_bubble_coral_wall_fan", 0x8D8783),
    ("minecraft:dead_bush", 0x6D5029),
    ("minecraft:dead_fire_coral", 0x89807C),
    ("minecraft:dead_fire_coral_block", 0x847C78),
    ("minecraft:dead_fire_coral_fan", 0x7D7673),
    ("minecraft:dead_fire_coral_wall_fan", 0x7D7673),
    ("minecraft:dead_horn_coral", 0x8F8782),
    ("minecraft:dead_horn_coral_block", 0x857E7A),
    ("minecraft:dead_horn_coral_fan", 0x877F7A),
    ("minecraft:dead_horn_coral_wall_fan", 0x877F7A),
    ("minecraft:dead_tube_coral", 0x77706C),
    ("minecraft:dead_tube_coral_block", 0x837C78),
    ("minecraft:dead_tube_coral_fan", 0x807976),
    ("minecraft:dead_tube_coral_wall_fan", 0x807976),
    ("minecraft:deepslate", 0x575759),
    ("minecraft:deepslate_brick_slab", 0x474747),
    ("minecraft:deepslate_brick_stairs", 0x474747),
    ("minecraft:deepslate_brick_wall", 0x474747),
    ("minecraft:deepslate_bricks", 0x474747),
    ("minecraft:deepslate_coal_ore", 0x49494B),
    ("minecraft:deepslate_copper_ore", 0x5D5E59),
    ("minecraft:deepslate_diamond_ore", 0x536D6E),
    ("minecraft:deepslate_emerald_ore", 0x4D6A57),
    ("minecraft:deepslate_gold_ore", 0x76684D),
    ("minecraft:deepslate_iron_ore", 0x6D6560),
    ("minecraft:deepslate_lapis_ore", 0x4F5B76),
    ("minecraft:deepslate_redstone_ore", 0x6B4849),
    ("minecraft:deepslate_tile_slab", 0x373738),
    ("minecraft:deepslate_tile_stairs", 0x373738),
    ("minecraft:deepslate_tile_wall", 0x373738),
    ("minecraft:deepslate_tiles", 0x373738),
    ("minecraft:detector_rail", 0x7A6658),
    ("minecraft:diamond_block", 0x65EFE5),
    ("minecraft:diamond_ore", 0x788F8F),
    ("minecraft:diorite", 0xBDBDBD),
    ("minecraft:diorite_slab", 0xBDBDBD),
    ("minecraft:diorite_stairs", 0xBDBDBD),
    ("minecraft:diorite_wall", 0xBDBDBD),
    ("minecraft:dirt", 0x866043),
    ("minecraft:dirt_path", 0x947A41),
    ("minecraft:dispenser", 0x727171),
    ("minecraft:dragon_egg", 0x0D0910),
    ("minecraft:dragon_head", 0x1D1A1E),
    ("minecraft:dragon_wall_head", 0x1D1A1E),
    ("minecraft:dried_kelp_block", 0x343C28),
    ("minecraft:dripstone_block", 0x866B5C),
    ("minecraft:dropper", 0x727171),
    ("minecraft:emerald_block", 0x2BCD5A),
    ("minecraft:emerald_ore", 0x6A8972),
    ("minecraft:enchanting_table", 0x7E3F4B),
    ("minecraft:end_gateway", 0x030303),
    ("minecraft:end_portal", 0x030303),
    ("minecraft:end_portal_frame", 0x5A755E),
    ("minecraft:end_rod", 0xC8BFB5),
    ("minecraft:end_stone", 0xDBDF9E),
    ("minecraft:end_stone_brick_slab", 0xDBE0A2),
    ("minecraft:end_stone_brick_stairs", 0xDBE0A2),
    ("minecraft:end_stone_brick_wall", 0xDBE0A2),
    ("minecraft:end_stone_bricks", 0xDBE0A2),
    ("minecraft:ender_chest", 0x2C3D3F),
    ("minecraft:exposed_copper", 0xA17E68),
    ("minecraft:exposed_cut_copper", 0x9B7A65),
    ("minecraft:exposed_cut_copper_slab", 0x9B7A65),
    ("minecraft:exposed_cut_copper_stairs", 0x9B7A65),
    ("minecraft:fern", 0x000000),
    ("minecraft:fire", 0xD48C35),
    ("minecraft:fire_coral", 0xA6252F),
    ("minecraft:fire_coral_block", 0xA4232F),
    ("minecraft:fire_coral_fan", 0x9F232E),
    ("minecraft:fire_coral_wall_fan", 0x9F232E),
    ("minecraft:fletching_table", 0xC6B687),
    ("minecraft:flower_pot", 0x000000),
    ("minecraft:flowering_azalea", 0x717A41),
    ("minecraft:flowering_azalea_leaves", 0x9D5CAB),
    ("minecraft:frogspawn", 0x6A5B52),
    ("minecraft:frosted_ice", 0x8CB5FD),
    ("minecraft:furnace", 0x727171),
    ("minecraft:gilded_blackstone", 0x382B27),
    ("minecraft:glass", 0xB0D6DB),
    ("minecraft:glass_pane", 0xB0D6DB),
    ("minecraft:glow_lichen", 0x70837A),
    ("minecraft:glowstone", 0xAD8455),
    ("minecraft:gold_block", 0xF8D33E),
    ("minecraft:gold_ore", 0x938769),
    ("minecraft:granite", 0x956756),
    ("minecraft:granite_slab", 0x956756),
    ("minecraft:granite_stairs", 0x956756),
    ("minecraft:granite_wall", 0x956756),
    ("minecraft:grass", 0x000000),
    ("minecraft:grass_block", 0x7EA44D),
    ("minecraft:gravel", 0x84807F),
    ("minecraft:gray_banner", 0x000000),
    ("minecraft:gray_bed", 0x3F4448),
    ("minecraft:gray_candle", 0x515F62),
    ("minecraft:gray_candle_cake", 0x515F62),
    ("minecraft:gray_carpet", 0x3F4448),
    ("minecraft:gray_concrete", 0x373A3E),
    ("minecraft:gray_concrete_powder", 0x4D5155),
    ("minecraft:gray_glazed_terracotta", 0x535B5E),
    ("minecraft:gray_shulker_box", 0x383C40),
    ("minecraft:gray_stained_glass", 0x4C4C4C),
    ("minecraft:gray_stained_glass_pane", 0x4C4C4C),
    ("minecraft:gray_terracotta", 0x3A2A24),
    ("minecraft:gray_wall_banner", 0x000000),
    ("minecraft:gray_wool", 0x3F4448),
    ("minecraft:green_banner", 0x000000),
    ("minecraft:green_bed", 0x556E1B),
    ("minecraft:green_candle", 0x4A6215),
    ("minecraft:green_candle_cake", 0x4A6215),
    ("minecraft:green_carpet", 0x556E1B),
    ("minecraft:green_concrete", 0x495B24),
    ("minecraft:green_concrete_powder", 0x61772D),
    ("minecraft:green_glazed_terracotta", 0x728B3F),
    ("minecraft:green_shulker_box", 0x50661F),
    ("minecraft:green_stained_glass", 0x667F33),
    ("minecraft:green_stained_glass_pane", 0x667F33),
    ("minecraft:green_terracotta", 0x4C532A),
    ("minecraft:green_wall_banner", 0x000000),
    ("minecraft:green_wool", 0x556E1B),
    ("minecraft:grindstone", 0x8A8A8A),
    ("minecraft:hanging_roots", 0xA3755E),
    ("minecraft:hay_block", 0xA68C0C),
    ("minecraft:heavy_weighted_pressure_plate", 0xDEDEDE),
    ("minecraft:honey_block", 0xFBB934),
    ("minecraft:honeycomb_block", 0xE5951E),
    ("minecraft:hopper", 0x4B4A4B),
    ("minecraft:horn_coral", 0xD1BA3F),
    ("minecraft:horn_coral_block", 0xD8C742),
    ("minecraft:horn_coral_fan", 0xCFB83D),
    ("minecraft:horn_coral_wall_fan", 0xCFB83D),
    ("minecraft:ice", 0x91B8FE),
    ("minecraft:infested_chiseled_stone_bricks", 0x787778),
    ("minecraft:infested_cobblestone", 0x807F7F),
    ("minecraft:infested_cracked_stone_bricks", 0x767676),
    ("minecraft:infested_deepslate", 0x575759),
    ("minecraft:infested_mossy_stone_bricks", 0x74796A),
    ("minecraft:infested_stone", 0x7E7E7E),
    ("minecraft:infested_stone_bricks", 0x7A7A7A),
    ("minecraft:iron_bars", 0x898C88),
    ("minecraft:iron_block", 0xDEDEDE),
    ("minecraft:iron_door", 0xC3C2C2),
    ("minecraft:iron_ore", 0x8A827B),
    ("minecraft:iron_trapdoor", 0xCCCCCC),
    ("minecraft:jack_o_lantern", 0xDB9F3A),
    ("minecraft:jigsaw", 0x5A4E5B),
    ("minecraft:jukebox", 0x604130),
    ("minecraft:jungle_button", 0x000000),
    ("minecraft:jungle_door", 0xA47854),
    ("minecraft:jungle_fence", 0xA17351),
    ("minecraft:jungle_fence_gate", 0xA17351),
    ("minecraft:jungle_leaves", 0x3D5616),
    ("minecraft:jungle_log", 0x554419),
    ("minecraft:jungle_planks", 0xA17351),
    ("minecraft:jungle_pressure_plate", 0xA17351),
    ("minecraft:jungle_sapling", 0x305111),
    ("minecraft:jungle_sign", 0xA17351),
    ("minecraft:jungle_slab", 0xA17351),
    ("minecraft:jungle_stairs", 0xA17351),
    ("minecraft:jungle_trapdoor", 0x9D7150),
    ("minecraft:jungle_wall_sign", 0xA17351),
    ("minecraft:jungle_wood", 0x554419),
    ("minecraft:kelp", 0x578B2C),
    ("minecraft:kelp_plant", 0x57802A),
    ("minecraft:ladder", 0x000000),
    ("minecraft:lantern", 0x6A5B54),
    ("minecraft:lapis_block", 0x1F438C),
    ("minecraft:lapis_ore", 0x68758F),
    ("minecraft:large_amethyst_bud", 0xA582CD),
    ("minecraft:large_fern", 0x000000),
    ("minecraft:lava", 0xD45A12),
    ("minecraft:lava_cauldron", 0x4A494A),
    ("minecraft:lectern", 0xAE8953),
    ("minecraft:lever", 0x000000),
    ("minecraft:light", 0x000000),
    ("minecraft:light_blue_banner", 0x000000),
    ("minecraft:light_blue_bed", 0x3AAFD9),
    ("minecraft:light_blue_candle", 0x238BC5),
    ("minecraft:light_blue_candle_cake", 0x238BC5),
    ("minecraft:light_blue_carpet", 0x3AAFD9),
    ("minecraft:light_blue_concrete", 0x2489C7),
    ("minecraft:light_blue_concrete_powder", 0x4AB5D5),
    ("minecraft:light_blue_glazed_terracotta", 0x60A6D1),
    ("minecraft:light_blue_shulker_box", 0x33A6D5),
    ("minecraft:light_blue_stained_glass", 0x6699D8),
    ("minecraft:light_blue_stained_glass_pane", 0x6699D8),
    ("minecraft:light_blue_terracotta", 0x716D8A),
    ("minecraft:light_blue_wall_banner", 0x000000),
    ("minecraft:light_blue_wool", 0x3AAFD9),
    ("minecraft:light_gray_banner", 0x000000),
    ("minecraft:light_gray_bed", 0x8E8E87),
    ("minecraft:light_gray_candle", 0x787A72),
    ("minecraft:light_gray_candle_cake", 0x787A72),
    ("minecraft:light_gray_carpet", 0x8E8E87),
    ("minecraft:light_gray_concrete", 0x7D7D73),
    ("minecraft:light_gray_concrete_powder", 0x9B9B94),
    ("minecraft:light_gray_glazed_terracotta", 0x91A7A9),
    ("minecraft:light_gray_shulker_box", 0x7F7F76),
    ("minecraft:light_gray_stained_glass", 0x999999),
    ("minecraft:light_gray_stained_glass_pane", 0x999999),
    ("minecraft:light_gray_terracotta", 0x876B62),
    ("minecraft:light_gray_wall_banner", 0x000000),
    ("minecraft:light_gray_wool", 0x8E8E87),
    ("minecraft:light_weighted_pressure_plate", 0xF8D33E),
    ("minecraft:lightning_rod", 0xC46F53),
    ("minecraft:lilac", 0x977D8F),
    ("minecraft:lily_of_the_valley", 0x7DB061),
    ("minecraft:lily_pad", 0x12491B),
    ("minecraft:lime_banner", 0x000000),
    ("minecraft:lime_bed", 0x70B91A),
    ("minecraft:lime_candle", 0x63AD17),
    ("minecraft:lime_candle_cake", 0x63AD17),
    ("minecraft:lime_carpet", 0x70B91A),
    ("minecraft:lime_concrete", 0x5EA919),
    ("minecraft:lime_concrete_powder", 0x7EBD2A),
    ("minecraft:lime_glazed_terracotta", 0xA3C636),
    ("minecraft:lime_shulker_box", 0x66AF17),
    ("minecraft:lime_stained_glass", 0x7FCC19),
    ("minecraft:lime_stained_glass_pane", 0x7FCC19),
    ("minecraft:lime_terracotta", 0x687635),
    ("minecraft:lime_wall_banner", 0x000000),
    ("minecraft:lime_wool", 0x70B91A),
    ("minecraft:lodestone", 0x929397),
    ("minecraft:loom", 0x8D775D),
    ("minecraft:magenta_banner", 0x000000),
    ("minecraft:magenta_bed", 0xBE45B4),
    ("minecraft:magenta_candle", 0xA22F9A),
    ("minecraft:magenta_candle_cake", 0xA22F9A),
    ("minecraft:magenta_carpet", 0xBE45B4),
    ("minecraft:magenta_concrete", 0xA9309F),
    ("minecraft:magenta_concrete_powder", 0xC154B9),
    ("minecraft:magenta_glazed_terracotta", 0xCF63BE),
    ("minecraft:magenta_shulker_box", 0xB037A5),
    ("minecraft:magenta_stained_glass", 0xB24CD8),
    ("minecraft:magenta_stained_glass_pane", 0xB24CD8),
    ("minecraft:magenta_terracotta", 0x96586D),
    ("minecraft:magenta_wall_banner", 0x000000),
    ("minecraft:magenta_wool", 0xBE45B4),
    ("minecraft:magma_block", 0x8E3F20),
    ("minecraft:mangrove_button", 0x000000),
    ("minecraft:mangrove_door", 0x70302E),
    ("minecraft:mangrove_fence", 0x763631),
    ("minecraft:mangrove_fence_gate", 0x763631),
    ("minecraft:mangrove_leaves", 0x22570C),
    ("minecraft:mangrove_log", 0x544329),
    ("minecraft:mangrove_planks", 0x763631),
    ("minecraft:mangrove_pressure_plate", 0x763631),
    ("minecraft:mangrove_propagule", 0x5FAF54),
    ("minecraft:mangrove_roots", 0x4B3C27),
    ("minecraft:mangrove_sign", 0x763631),
    ("minecraft:mangrove_slab", 0x763631),
    ("minecraft:mangrove_stairs", 0x763631),
    ("minecraft:mangrove_trapdoor", 0x6F2F2B),
    ("minecraft:mangrove_wall_sign", 0x763631),
    ("minecraft:mangrove_wood", 0x544329),
    ("minecraft:medium_amethyst_bud", 0xA37CCC),
    ("minecraft:melon", 0x6D901E),
    ("minecraft:melon_stem", 0x9B9B9B),
    ("minecraft:moss_block", 0x596E2D),
    ("minecraft:moss_carpet", 0x596E2D),
    ("minecraft:mossy_cobblestone", 0x6D765E),
    ("minecraft:mossy_cobblestone_slab", 0x6D765E),
    ("minecraft:mossy_cobblestone_stairs", 0x6D765E),
    ("minecraft:mossy_cobblestone_wall", 0x6D765E),
    ("minecraft:mossy_stone_brick_slab", 0x74796A),
    ("minecraft:mossy_stone_brick_stairs", 0x74796A),
    ("minecraft:mossy_stone_brick_wall", 0x74796A),
    ("minecraft:mossy_stone_bricks", 0x74796A),
    ("minecraft:moving_piston", 0x6E6961),
    ("minecraft:mud", 0x3C3A3D),
    ("minecraft:mud_brick_slab", 0x89684F),
    ("minecraft:mud_brick_stairs", 0x89684F),
    ("minecraft:mud_brick_wall", 0x89684F),
    ("minecraft:mud_bricks", 0x89684F),
    ("minecraft:muddy_mangrove_roots", 0x463B2D),
    ("minecraft:mushroom_stem", 0xCBC4B9),
    ("minecraft:mycelium", 0x6F6365),
    ("minecraft:nether_brick_fence", 0x2C161A),
    ("minecraft:nether_brick_slab", 0x2C161A),
    ("minecraft:nether_brick_stairs", 0x2C161A),
    ("minecraft:nether_brick_wall", 0x2C161A),
    ("minecraft:nether_bricks", 0x2C161A),
    ("minecraft:nether_gold_ore", 0x76392B),
    ("minecraft:nether_portal", 0x590CC1),
    ("minecraft:nether_quartz_ore", 0x794642),
    ("minecraft:nether_sprouts", 0x139985),
    ("minecraft:nether_wart", 0x711314),
    ("minecraft:nether_wart_block", 0x730302),
    ("minecraft:netherite_block", 0x443F41),
    ("minecraft:netherrack", 0x622727),
    ("minecraft:note_block", 0x5C3C29),
    ("minecraft:oak_button", 0x000000),
    ("minecraft:oak_door", 0x8C6E41),
    ("minecraft:oak_fence", 0xA2834F),
    ("minecraft:oak_fence_gate", 0xA2834F),
    ("minecraft:oak_leaves", 0x22570C),
    ("minecraft:oak_log", 0x6D5533),
    ("minecraft:oak_planks", 0xA2834F),
    ("minecraft:oak_pressure_plate", 0xA2834F),
    ("minecraft:oak_sapling", 0x4E6A29),
    ("minecraft:oak_sign", 0xA2834F),
    ("minecraft:oak_slab", 0xA2834F),
    ("minecraft:oak_stairs", 0xA2834F),
    ("minecraft:oak_trapdoor", 0x80663B),
    ("minecraft:oak_wall_sign", 0xA2834F),
    ("minecraft:oak_wood", 0x6D5533),
    ("minecraft:observer", 0x676767),
    ("minecraft:obsidian", 0x0F0B19),
    ("minecraft:ochre_froglight", 0xFCF8D5),
    ("minecraft:orange_banner", 0x000000),
    ("minecraft:orange_bed", 0xF17613),
    ("minecraft:orange_candle", 0xDD660A),
    ("minecraft:orange_candle_cake", 0xDD660A),
    ("minecraft:orange_carpet", 0xF17613),
    ("minecraft:orange_concrete", 0xE06101),
    ("minecraft:orange_concrete_powder", 0xE38420),
    ("minecraft:orange_glazed_terracotta", 0xA29258),
    ("minecraft:orange_shulker_box", 0xEC6C0A),
    ("minecraft:orange_stained_glass", 0xD87F33),
    ("minecraft:orange_stained_glass_pane", 0xD87F33),
    ("minecraft:orange_terracotta", 0xA25426),
    ("minecraft:orange_tulip", 0x5E8E1F),
    ("minecraft:orange_wall_banner", 0x000000),
    ("minecraft:orange_wool", 0xF17613),
    ("minecraft:oxeye_daisy", 0xB7CC91),
    ("minecraft:oxidized_copper", 0x53A486),
    ("minecraft:oxidized_cut_copper", 0x509A7F),
    ("minecraft:oxidized_cut_copper_slab", 0x509A7F),
    ("minecraft:oxidized_cut_copper_stairs", 0x509A7F),
    ("minecraft:packed_ice", 0x8DB4FA),
    ("minecraft:packed_mud", 0x8F6B50),
    ("minecraft:pearlescent_froglight", 0xF8F3F3),
    ("minecraft:peony", 0x817E8A),
    ("minecraft:petrified_oak_slab", 0x6D5533),
    ("minecraft:pink_banner", 0x000000),
    ("minecraft:pink_bed", 0xEE8DAC),
    ("minecraft:pink_candle", 0xD26890),
    ("minecraft:pink_candle_cake", 0xD26890),
    ("minecraft:pink_carpet", 0xEE8DAC),
    ("minecraft:pink_concrete", 0xD6658F),
    ("minecraft:pink_concrete_powder", 0xE59AB5),
    ("minecraft:pink_glazed_terracotta", 0xED9BB6),
    ("minecraft:pink_petals", 0xE8BFE8),
    ("minecraft:pink_shulker_box", 0xE87C9F),
    ("minecraft:pink_stained_glass", 0xF27FA5),
    ("minecraft:pink_stained_glass_pane", 0xF27FA5),
    ("minecraft:pink_terracotta", 0xA24E4F),
    ("minecraft:pink_tulip", 0xE8BFE8),
    ("minecraft:pink_wall_banner", 0x000000),
    ("minecraft:pink_wool", 0xEE8DAC),
    ("minecraft:piston", 0x6E6961),
    ("minecraft:piston_head", 0x987E52),
    ("minecraft:player_head", 0x2A1C0C),
    ("minecraft:player_wall_head", 0x2A1C0C),
    ("minecraft:podzol", 0x5C3F18),
    ("minecraft:pointed_dripstone", 0x816659),
    ("minecraft:polished_andesite", 0x848786),
    ("minecraft:polished_andesite_slab", 0x848786),
    ("minecraft:polished_andesite_stairs", 0x848786),
    ("minecraft:polished_basalt", 0x656466),
    ("minecraft:polished_blackstone", 0x353139),
    ("minecraft:polished_blackstone_brick_slab", 0x302B32),
    ("minecraft:polished_blackstone_brick_stairs", 0x302B32),
    ("minecraft:polished_blackstone_brick_wall", 0x302B32),
    ("minecraft:polished_blackstone_bricks", 0x302B32),
    ("minecraft:polished_blackstone_button", 0x000000),
    ("minecraft:polished_blackstone_pressure_plate", 0x353139),
    ("minecraft:polished_blackstone_slab", 0x353139),
    ("minecraft:polished_blackstone_stairs", 0x353139),
    ("minecraft:polished_blackstone_wall", 0x353139),
    ("minecraft:polished_deepslate", 0x484849),
    ("minecraft:polished_deepslate_slab", 0x484849),
    ("minecraft:polished_deepslate_stairs", 0x484849),
    ("minecraft:polished_deepslate_wall", 0x484849),
    ("minecraft:polished_diorite", 0xC3C3C5),
    ("minecraft:polished_diorite_slab", 0xC3C3C5),
    ("minecraft:polished_diorite_stairs", 0xC3C3C5),
    ("minecraft:polished_granite", 0x9B6B59),
    ("minecraft:polished_granite_slab", 0x9B6B59),
    ("minecraft:polished_granite_stairs", 0x9B6B59),
    ("minecraft:poppy", 0x8A3F26),
    ("minecraft:potatoes", 0x46872A),
    ("minecraft:potted_acacia_sapling", 0x777618),
    ("minecraft:potted_allium", 0xA089B9),
    ("minecraft:potted_azalea_bush", 0x647A30),
    ("minecraft:potted_azure_bluet", 0xACCE82),
    ("minecraft:potted_bamboo", 0x5D9013),
    ("minecraft:potted_birch_sapling", 0x81A251),
    ("minecraft:potted_blue_orchid", 0x30A3AA),
    ("minecraft:potted_brown_mushroom", 0x9A755C),
    ("minecraft:potted_cactus", 0x58822D),
    ("minecraft:potted_cornflower", 0x507896),
    ("minecraft:potted_crimson_fungus", 0x8F2C1D),
    ("minecraft:potted_crimson_roots", 0x7F082A),
    ("minecraft:potted_dandelion", 0x9EB02E),
    ("minecraft:potted_dark_oak_sapling", 0x3C5B1E),
    ("minecraft:potted_dead_bush", 0x6D5029),
    ("minecraft:potted_fern", 0x7EA44D),
    ("minecraft:potted_flowering_azalea_bush", 0x9D5CAB),
    ("minecraft:potted_jungle_sapling", 0x305111),
    ("minecraft:potted_lily_of_the_valley", 0x7DB061),
    ("minecraft:potted_mangrove_propagule", 0x5FAF54),
    ("minecraft:potted_oak_sapling", 0x4E6A29),
    ("minecraft:potted_orange_tulip", 0x5E8E1F),
    ("minecraft:potted_oxeye_daisy", 0xB7CC91),
    ("minecraft:potted_pink_tulip", 0x649E50),
    ("minecraft:potted_poppy", 0x8A3F26),
    ("minecraft:potted_red_mushroom", 0xDA4740),
    ("minecraft:potted_red_tulip", 0x5B8122),
    ("minecraft:potted_spruce_sapling", 0x2D3D25),
    ("minecraft:potted_warped_fungus", 0x4C7059),
    ("minecraft:potted_warped_roots", 0x148B7D),
    ("minecraft:potted_white_tulip", 0x5FA548),
    ("minecraft:potted_wither_rose", 0x292C17),
    ("minecraft:powder_snow", 0xF8FDFD),
    ("minecraft:powder_snow_cauldron", 0x4A494A),
    ("minecraft:powered_rail", 0x896B47),
    ("minecraft:prismarine", 0x639C97),
    ("minecraft:prismarine_brick_slab", 0x63AC9F),
    ("minecraft:prismarine_brick_stairs", 0x63AC9F),
    ("minecraft:prismarine_bricks", 0x63AC9F),
    ("minecraft:prismarine_slab", 0x639C97),
    ("minecraft:prismarine_stairs", 0x639C97),
    ("minecraft:prismarine_wall", 0x639C97),
    ("minecraft:pumpkin", 0xC57618),
    ("minecraft:pumpkin_stem", 0x9B9B9B),
    ("minecraft:purple_banner", 0x000000),
    ("minecraft:purple_bed", 0x7A2AAC),
    ("minecraft:purple_candle", 0x6B23A0),
    ("minecraft:purple_candle_cake", 0x6B23A0),
    ("minecraft:purple_carpet", 0x7A2AAC),
    ("minecraft:purple_concrete", 0x64209C),
    ("minecraft:purple_concrete_powder", 0x8438B2),
    ("minecraft:purple_glazed_terracotta", 0x6D3198),
    ("minecraft:purple_shulker_box", 0x69219E),
    ("minecraft:purple_stained_glass", 0x7F3FB2),
    ("minecraft:purple_stained_glass_pane", 0x7F3FB2),
    ("minecraft:purple_terracotta", 0x764656),
    ("minecraft:purple_wall_banner", 0x000000),
    ("minecraft:purple_wool", 0x7A2AAC),
    ("minecraft:purpur_block", 0xAA7EAA),
    ("minecraft:purpur_pillar", 0xAB7FAB),
    ("minecraft:purpur_slab", 0xAA7EAA),
    ("minecraft:purpur_stairs", 0xAA7EAA),
    ("minecraft:quartz_block", 0xECE6DF),
    ("minecraft:quartz_bricks", 0xEBE5DE),
    ("minecraft:quartz_pillar", 0xECE6E0),
    ("minecraft:quartz_slab", 0xECE6DF),
    ("minecraft:quartz_stairs", 0xECE6DF),
    ("minecraft:rail", 0x7E6F56),
    ("minecraft:raw_copper_block", 0x9C6A4F),
    ("minecraft:raw_gold_block", 0xDDA92F),
    ("minecraft:raw_iron_block", 0xA6886B),
    ("minecraft:red_banner", 0x000000),
    ("minecraft:red_bed", 0xC7C7C7),
    ("minecraft:red_candle", 0x9B2825),
    ("minecraft:red_candle_cake", 0x9B2825),
    ("minecraft:red_carpet", 0xA12723),
    ("minecraft:red_concrete", 0x8E2121),
    ("minecraft:red_concrete_powder", 0xA83633),
    ("minecraft:red_glazed_terracotta", 0xB63B34),
    ("minecraft:red_mushroom", 0xDA4740),
    ("minecraft:red_mushroom_block", 0xC9302E),
    ("minecraft:red_nether_brick_slab", 0x460709),
    ("minecraft:red_nether_brick_stairs", 0x460709),
    ("minecraft:red_nether_brick_wall", 0x460709),
    ("minecraft:red_nether_bricks", 0x460709),
    ("minecraft:red_sand", 0xBE6721),
    ("minecraft:red_sandstone", 0xB5621F),
    ("minecraft:red_sandstone_slab", 0xB5621F),
    ("minecraft:red_sandstone_stairs", 0xB5621F),
    ("minecraft:red_sandstone_wall", 0xB5621F),
    ("minecraft:red_shulker_box", 0x8F201F),
    ("minecraft:red_stained_glass", 0x993333),
    ("minecraft:red_stained_glass_pane", 0x993333),
    ("minecraft:red_terracotta", 0x8F3D2F),
    ("minecraft:red_tulip", 0x5B8122),
    ("minecraft:red_wall_banner", 0x000000),
    ("minecraft:red_wool", 0xA12723),
    ("minecraft:redstone_block", 0xA91705),
    ("minecraft:redstone_lamp", 0x64391F),
    ("minecraft:redstone_ore", 0x8E6C6C),
    ("minecraft:redstone_torch", 0xF85528),
    ("minecraft:redstone_wall_torch", 0x855280),
    ("minecraft:redstone_wire", 0xFF0000),
    ("minecraft:reinforced_deepslate", 0x4D4F4C),
    ("minecraft:repeater", 0xA09C9B),
    ("minecraft:repeating_command_block", 0x8371AF),
    ("minecraft:respawn_anchor", 0x4C1994),
    ("minecraft:rooted_dirt", 0x90674C),
    ("minecraft:rose_bush", 0x814225),
    ("minecraft:sand", 0xDBCFA3),
    ("minecraft:sandstone", 0xE0D6AA),
    ("minecraft:sandstone_slab", 0xE0D6AA),
    ("minecraft:sandstone_stairs", 0xE0D6AA),
    ("minecraft:sandstone_wall", 0xE0D6AA),
    ("minecraft:scaffolding", 0xAD834E),
    ("minecraft:sculk", 0x0D1E24),
    ("minecraft:sculk_catalyst", 0x0F2027),
    ("minecraft:sculk_sensor", 0x074654),
    ("minecraft:sculk_shrieker", 0x1B3435),
    ("minecraft:sculk_vein", 0x08303A),
    ("minecraft:sea_lantern", 0xB1CBC2),
    ("minecraft:sea_pickle", 0x5A6126),
    ("minecraft:seagrass", 0x337E08),
    ("minecraft:shroomlight", 0xF2974C),
    ("minecraft:shulker_box", 0x8D628D),
    ("minecraft:skeleton_skull", 0xB3B3B3),
    ("minecraft:skeleton_wall_skull", 0xB3B3B3),
    ("minecraft:slime_block", 0x6FC05B),
    ("minecraft:small_amethyst_bud", 0x8564C2),
    ("minecraft:small_dripleaf", 0x5C742E),
    ("minecraft:smithing_table", 0x383945),
    ("minecraft:smoker", 0x535150),
    ("minecraft:smooth_basalt", 0x48484E),
    ("minecraft:smooth_quartz", 0xEDE6E0),
    ("minecraft:smooth_quartz_slab", 0xEDE6E0),
    ("minecraft:smooth_quartz_stairs", 0xEDE6E0),
    ("minecraft:smooth_red_sandstone", 0xB5621F),
    ("minecraft:smooth_red_sandstone_slab", 0xB5621F),
    ("minecraft:smooth_red_sandstone_stairs", 0xB5621F),
    ("minecraft:smooth_sandstone", 0xE0D6AA),
    ("minecraft:smooth_sandstone_slab", 0xE0D6AA),
    ("minecraft:smooth_sandstone_stairs", 0xE0D6AA),
    ("minecraft:smooth_stone", 0xA1A1A1),
    ("minecraft:smooth_stone_slab", 0xA1A1A1),
    ("minecraft:snow", 0xF9FEFE),
    ("minecraft:snow_block", 0xF9FEFE),
    ("minecraft:soul_campfire", 0x53CED2),
    ("minecraft:soul_fire", 0x34C1C5),
    ("minecraft:soul_lantern", 0x486473),
    ("minecraft:soul_sand", 0x523E33),
    ("minecraft:soul_soil", 0x4C3A2F),
    ("minecraft:soul_torch", 0x6BE2E6),
    ("minecraft:soul_wall_torch", 0x6BE2E6),
    ("minecraft:spawner", 0x252F40),
    ("minecraft:sponge", 0xC4C14B),
    ("minecraft:spore_blossom", 0xD463A4),
    ("minecraft:spruce_button", 0x000000),
    ("minecraft:spruce_door", 0x6A5030),
    ("minecraft:spruce_fence", 0x735531),
    ("minecraft:spruce_fence_gate", 0x735531),
    ("minecraft:spruce_leaves", 0x4E7A4E),
    ("minecraft:spruce_log", 0x3B2611),
    ("minecraft:spruce_planks", 0x735531),
    ("minecraft:spruce_pressure_plate", 0x735531),
    ("minecraft:spruce_sapling", 0x2D3D25),
    ("minecraft:spruce_sign", 0x735531),
    ("minecraft:spruce_slab", 0x735531),
    ("minecraft:spruce_stairs", 0x735531),
    ("minecraft:spruce_trapdoor", 0x684F30),
    ("minecraft:spruce_wall_sign", 0x735531),
    ("minecraft:spruce_wood", 0x3B2611),
    ("minecraft:sticky_piston", 0x769759),
    ("minecraft:stone", 0x7E7E7E),
    ("minecraft:stone_brick_slab", 0x7A7A7A),
    ("minecraft:stone_brick_stairs", 0x7A7A7A),
    ("minecraft:stone_brick_wall", 0x7A7A7A),
    ("minecraft:stone_bricks", 0x7A7A7A),
    ("minecraft:stone_button", 0x000000),
    ("minecraft:stone_pressure_plate", 0x7E7E7E),
    ("minecraft:stone_slab", 0x7E7E7E),
    ("minecraft:stone_stairs", 0x7E7E7E),
    ("minecraft:stonecutter", 0x7A7772),
    ("minecraft:stripped_acacia_log", 0xB05D3C),
    ("minecraft:stripped_acacia_wood", 0xB05D3C),
    ("minecraft:stripped_birch_log", 0xC6B177),
    ("minecraft:stripped_birch_wood", 0xC6B177),
    ("minecraft:stripped_crimson_hyphae", 0x8A3A5B),
    ("minecraft:stripped_crimson_stem", 0x8A3A5B),
    ("minecraft:stripped_dark_oak_log", 0x493924),
    ("minecraft:stripped_dark_oak_wood", 0x493924),
    ("minecraft:stripped_jungle_log", 0xAC8555),
    ("minecraft:stripped_jungle_wood", 0xAC8555),
    ("minecraft:stripped_mangrove_log", 0x783730),
    ("minecraft:stripped_mangrove_wood", 0x783730),
    ("minecraft:stripped_oak_log", 0xB39157),
    ("minecraft:stripped_oak_wood", 0xB39157),
    ("minecraft:stripped_spruce_log", 0x745A35),
    ("minecraft:stripped_spruce_wood", 0x745A35),
    ("minecraft:stripped_warped_hyphae", 0x3A9895),
    ("minecraft:stripped_warped_stem", 0x3A9895),
    ("minecraft:structure_block", 0x5F5060),
    ("minecraft:structure_void", 0x000000),
    ("minecraft:sugar_cane", 0x95C165),
    ("minecraft:sunflower", 0xF6C436),
    ("minecraft:sweet_berry_bush", 0x305E3A),
    ("minecraft:tall_grass", 0x000000),
    ("minecraft:tall_seagrass", 0x2E7604),
    ("minecraft:target", 0xE2AA9E),
    ("minecraft:terracotta", 0x985E44),
    ("minecraft:tinted_glass", 0x2B262E),
    ("minecraft:tnt", 0x873D36),
    ("minecraft:torch", 0xFFD966),
    ("minecraft:trapped_chest", 0x866025),
    ("minecraft:tripwire", 0x000000),
    ("minecraft:tripwire_hook", 0x000000),
    ("minecraft:tube_coral", 0x3054C5),
    ("minecraft:tube_coral_block", 0x3158CF),
    ("minecraft:tube_coral_fan", 0x335BD1),
    ("minecraft:tube_coral_wall_fan", 0x335BD1),
    ("minecraft:tuff", 0x6C6D67),
    ("minecraft:turtle_egg", 0xE5E3C0),
    ("minecraft:twisting_vines", 0x14907D),
    ("minecraft:twisting_vines_plant", 0x14897A),
    ("minecraft:verdant_froglight", 0xEAF6E9),
    ("minecraft:vine", 0x000000),
    ("minecraft:void_air", 0x000000),
    ("minecraft:wall_torch", 0xFFD966),
    ("minecraft:warped_button", 0x000000),
    ("minecraft:warped_door", 0x2D7E78),
    ("minecraft:warped_fence", 0x2B6963),
    ("minecraft:warped_fence_gate", 0x2B6963),
    ("minecraft:warped_fungus", 0x4C7059),
    ("minecraft:warped_hyphae", 0x3A3B4E),
    ("minecraft:warped_nylium", 0x2B7365),
    ("minecraft:warped_planks", 0x2B6963),
    ("minecraft:warped_pressure_plate", 0x2B6963),
    ("minecraft:warped_roots", 0x148B7D),
    ("minecraft:warped_sign", 0x2B6963),
    ("minecraft:warped_slab", 0x2B6963),
    ("minecraft:warped_stairs", 0x2B6963),
    ("minecraft:warped_stem", 0x3A3B4E),
    ("minecraft:warped_trapdoor", 0x307A72),
    ("minecraft:warped_wall_sign", 0x2B6963),
    ("minecraft:warped_wart_block", 0x177879),
    ("minecraft:water", 0x0000FF),
    ("minecraft:water_cauldron", 0x4A494A),
    ("minecraft:waxed_copper_block", 0xC06C50),
    ("minecraft:waxed_cut_copper", 0xBF6B51),
    ("minecraft:waxed_cut_copper_slab", 0xBF6B51),
    ("minecraft:waxed_cut_copper_stairs", 0xBF6B51),
    ("minecraft:waxed_exposed_copper", 0xA17E68),
    ("minecraft:waxed_exposed_cut_copper", 0x9B7A65),
    ("minecraft:waxed_exposed_cut_copper_slab", 0x9B7A65),
    ("minecraft:waxed_exposed_cut_copper_stairs", 0x9B7A65),
    ("minecraft:waxed_oxidized_copper", 0x53A486),
    ("minecraft:waxed_oxidized_cut_copper", 0x509A7F),
    ("minecraft:waxed_oxidized_cut_copper_slab", 0x509A7F),
    ("minecraft:waxed_oxidized_cut_copper_stairs", 0x509A7F),
    ("minecraft:waxed_weathered_copper", 0x6C9A6F),
    ("minecraft:waxed_weathered_cut_copper", 0x6D916B),
    ("minecraft:waxed_weathered_cut_copper_slab", 0x6D916B),
    ("minecraft:waxed_weathered_cut_copper_stairs", 0x6D916B),
    ("minecraft:weathered_copper", 0x6C9A6F),
    ("minecraft:weathered_cut_copper", 0x6D916B),
    ("minecraft:weathered_cut_copper_slab", 0x6D916B),
    ("minecraft:weathered_cut_copper_stairs", 0x6D916B),
    ("minecraft:weeping_vines", 0x680100),
    ("minecraft:weeping_vines_plant", 0x84100C),
    ("minecraft:wet_sponge", 0xAAB446),
    ("minecraft:white_banner", 0x000000),
    ("minecraft:white_bed", 0xEAECED),
    ("minecraft:white_candle", 0xD4DADB),
    ("minecraft:white_candle_cake", 0xD4DADB),
    ("minecraft:white_carpet", 0xEAECED),
    ("minecraft:white_concrete", 0xCFD5D6),
    ("minecraft:white_concrete_powder", 0xE2E4E4),
    ("minecraft:white_glazed_terracotta", 0xBAD3CE),
    ("minecraft:white_shulker_box", 0xDADFDF),
    ("minecraft:white_stained_glass", 0xFFFFFF),
    ("minecraft:white_stained_glass_pane", 0xFFFFFF),
    ("minecraft:white_terracotta", 0xD2B2A1),
    ("minecraft:white_tulip", 0x5FA548),
    ("minecraft:white_wall_banner", 0x000000),
    ("minecraft:white_wool", 0xEAECED),
    ("minecraft:wither_rose", 0x292C17),
    ("minecraft:wither_skeleton_skull", 0x323232),
    ("minecraft:wither_skeleton_wall_skull", 0x323232),
    ("minecraft:yellow_banner", 0x000000),
    ("minecraft:yellow_bed", 0xF9C628),
    ("minecraft:yellow_candle", 0xD3A733),
    ("minecraft:yellow_candle_cake", 0xD3A733),
    ("minecraft:yellow_carpet", 0xF9C628),
    ("minecraft:yellow_concrete", 0xF1AF15),
    ("minecraft:yellow_concrete_powder", 0xE9C737),
    ("minecraft:yellow_glazed_terracotta", 0xECC35B),
    ("minecraft:yellow_shulker_box", 0xF9BE1E),
    ("minecraft:yellow_stained_glass", 0xE5E533),
    ("minecraft:yellow_stained_glass_pane", 0xE5E533),
    ("minecraft:yellow_terracotta", 0xBA8523),
    ("minecraft:yellow_wall_banner", 0x000000),
    ("minecraft:yellow_wool", 0xF9C628),
    ("minecraft:zombie_head", 0x52763F),
    ("minecraft:zombie_wall_head", 0x52763F),
];
