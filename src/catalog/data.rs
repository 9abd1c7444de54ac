//! Built-in catalogue tables.

/// `(id, name, song_count, icon)`
pub(super) const REGIONS: &[(&str, &str, u32, &str)] = &[
    ("1", "North America", 250, "🗽"),
    ("2", "Latin America", 180, "🌎"),
    ("3", "Europe", 320, "🏰"),
    ("4", "Africa", 150, "🦁"),
    ("5", "Asia", 200, "🏯"),
    ("6", "Oceania", 90, "🏝️"),
];

/// `(id, name, song_count, region_id)`
pub(super) const ARTISTS: &[(&str, &str, u32, &str)] = &[
    ("a1", "Fanny Crosby", 120, "1"),
    ("a2", "Ira D. Sankey", 85, "1"),
    ("a3", "Charles Wesley", 45, "1"),
    ("a4", "Marcos Witt", 65, "2"),
    ("a5", "Alex Campos", 42, "2"),
    ("a6", "John Newton", 38, "3"),
    ("a7", "Isaac Watts", 52, "3"),
    ("a8", "Horatio Spafford", 28, "4"),
    ("a9", "Chris Tomlin", 95, "5"),
    ("a10", "Hillsong", 110, "6"),
];

/// `(id, title, artist_id, favorite)`
pub(super) const SONGS: &[(&str, &str, &str, bool)] = &[
    ("s1", "Blessed Assurance", "a1", true),
    ("s2", "To God Be the Glory", "a1", false),
    ("s3", "Jesus Is Tenderly Calling", "a1", true),
    ("s4", "The Ninety and Nine", "a2", false),
    ("s5", "A Shelter in the Time of Storm", "a2", false),
    ("s6", "Hark! The Herald Angels Sing", "a3", true),
    ("s7", "Love Divine, All Loves Excelling", "a3", false),
    ("s8", "Gracias", "a4", false),
    ("s9", "Tu Mirada", "a4", true),
    ("s10", "El Alfarero", "a5", false),
    ("s11", "Amazing Grace", "a6", true),
    ("s12", "Joy to the World", "a7", false),
    ("s13", "When I Survey the Wondrous Cross", "a7", true),
    ("s14", "It Is Well With My Soul", "a8", true),
    ("s15", "How Great Is Our God", "a9", true),
    ("s16", "Good Good Father", "a9", false),
    ("s17", "What a Beautiful Name", "a10", false),
    ("s18", "Oceans (Where Feet May Fail)", "a10", true),
];

/// `(song_id, year, lyrics)` for songs with a lyric sheet.
pub(super) const LYRICS: &[(&str, &str, &str)] = &[
    ("s1", "1873", BLESSED_ASSURANCE),
    ("s11", "1779", AMAZING_GRACE),
    ("s14", "1873", IT_IS_WELL),
];

const BLESSED_ASSURANCE: &str = "\
[D]Blessed assurance, [G]Jesus is [D]mine!
Oh, what a foretaste of [E7]glory di[A]vine!
[D]Heir of salvation, [G]purchase of [D]God,
[G]Born of His [D]Spirit, [A7]washed in His [D]blood.

[D]This is my story, [G]this is my [D]song,
Praising my Savior [E7]all the day [A]long;
[D]This is my story, [G]this is my [D]song,
[G]Praising my [D]Savior [A7]all the day [D]long.

[D]Perfect submission, [G]perfect de[D]light,
Visions of rapture now [E7]burst on my [A]sight;
[D]Angels descending, [G]bring from a[D]bove
[G]Echoes of [D]mercy, [A7]whispers of [D]love.

[D]Perfect submission, [G]all is at [D]rest,
I in my Savior am [E7]happy and [A]blest;
[D]Watching and waiting, [G]looking a[D]bove,
[G]Filled with His [D]goodness, [A7]lost in His [D]love.";

const AMAZING_GRACE: &str = "\
A[G]mazing [G7]grace! How [C]sweet the [G]sound
That saved a wretch like [D]me!
I [G]once was [G7]lost, but [C]now am [G]found;
Was [Em]blind, but [D]now I [G]see.

'Twas [G]grace that [G7]taught my [C]heart to [G]fear,
And grace my fears re[D]lieved;
How [G]precious [G7]did that [C]grace ap[G]pear
The [Em]hour I [D]first be[G]lieved.

Through [G]many [G7]dangers, [C]toils and [G]snares,
I have already [D]come;
'Tis [G]grace hath [G7]brought me [C]safe thus [G]far,
And [Em]grace will [D]lead me [G]home.";

const IT_IS_WELL: &str = "\
When [Bb]peace like a [Gm]river at[Eb]tendeth my [Bb]way,
When [Bb]sorrows like [Gm]sea billows [Cm]roll;[F]
What[Bb]ever my [F]lot, Thou hast [Gm]taught me to [Cm]say,
It is [Bb]well, it is [F7]well with my [Bb]soul.

It is [F]well [F7]with my [Bb]soul,
It is [Eb]well, it is [F7]well with my [Bb]soul.

Though [Bb]Satan should [Gm]buffet, though [Eb]trials should [Bb]come,
Let this [Bb]blest as[Gm]surance con[Cm]trol,[F]
That [Bb]Christ hath re[F]garded my [Gm]helpless es[Cm]tate,
And hath [Bb]shed His own [F7]blood for my [Bb]soul.";
