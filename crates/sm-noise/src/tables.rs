//! Authored noise values, one table per coach.
//!
//! Seating tables are 4 rows × 7 seats and six-berth tables are
//! 7 compartments × 6 berths; both are read row-major.  Four-berth tables
//! are 7 compartments × `[floor-1 a, floor-1 b, floor-2 a, floor-2 b]` and
//! are reduced to one value per floor before use (see [`crate::map`]).

pub(crate) const SEATING: [[[u16; 7]; 4]; 2] = [
    // coach 1
    [
        [1200, 1205, 1210, 1215, 1220, 1225, 1230],
        [1235, 1240, 1245, 1250, 1255, 1260, 1265],
        [1270, 1275, 1280, 1285, 1290, 1295, 1300],
        [1305, 1310, 1315, 1320, 1325, 1330, 1335],
    ],
    // coach 2
    [
        [1340, 1345, 1350, 1355, 1360, 1365, 1370],
        [1375, 1380, 1385, 1390, 1395, 1400, 1405],
        [1410, 1415, 1420, 1425, 1430, 1435, 1440],
        [1445, 1450, 1455, 1460, 1465, 1470, 1475],
    ],
];

pub(crate) const SIX_BERTH: [[[u16; 6]; 7]; 3] = [
    // coach 3
    [
        [642, 635, 628, 647, 640, 633],
        [652, 645, 638, 657, 650, 643],
        [662, 655, 648, 667, 660, 653],
        [672, 665, 658, 677, 670, 663],
        [682, 675, 668, 687, 680, 673],
        [692, 685, 678, 697, 690, 683],
        [702, 700, 693, 707, 700, 693],
    ],
    // coach 4
    [
        [712, 705, 698, 717, 710, 703],
        [722, 715, 708, 727, 720, 713],
        [732, 725, 718, 737, 730, 723],
        [742, 735, 728, 747, 740, 733],
        [752, 745, 738, 757, 750, 743],
        [762, 755, 748, 767, 760, 753],
        [772, 765, 758, 777, 770, 763],
    ],
    // coach 5
    [
        [782, 775, 768, 787, 780, 773],
        [792, 785, 778, 797, 790, 783],
        [802, 795, 788, 807, 800, 793],
        [812, 805, 798, 817, 810, 803],
        [822, 815, 808, 827, 820, 813],
        [832, 825, 818, 837, 830, 823],
        [842, 835, 828, 847, 840, 833],
    ],
];

pub(crate) const FOUR_BERTH: [[[u16; 4]; 7]; 5] = [
    // coach 6
    [
        [1520, 1484, 1524, 1485],
        [1524, 1486, 1528, 1487],
        [1528, 1488, 1532, 1489],
        [1532, 1490, 1536, 1491],
        [1536, 1492, 1540, 1493],
        [1540, 1494, 1544, 1495],
        [1544, 1496, 1548, 1497],
    ],
    // coach 7
    [
        [1552, 1498, 1556, 1499],
        [1556, 1500, 1560, 1501],
        [1560, 1502, 1564, 1503],
        [1564, 1504, 1568, 1505],
        [1568, 1506, 1572, 1507],
        [1572, 1508, 1576, 1509],
        [1576, 1510, 1580, 1511],
    ],
    // coach 8
    [
        [1584, 1512, 1588, 1513],
        [1588, 1514, 1592, 1515],
        [1592, 1516, 1596, 1517],
        [1596, 1518, 1600, 1519],
        [1600, 1520, 1604, 1521],
        [1604, 1522, 1608, 1523],
        [1608, 1524, 1612, 1525],
    ],
    // coach 9
    [
        [1616, 1526, 1620, 1527],
        [1620, 1528, 1624, 1529],
        [1624, 1530, 1628, 1531],
        [1628, 1532, 1632, 1533],
        [1632, 1534, 1636, 1535],
        [1636, 1536, 1640, 1537],
        [1640, 1538, 1644, 1539],
    ],
    // coach 10
    [
        [1648, 1540, 1652, 1541],
        [1652, 1542, 1656, 1543],
        [1656, 1544, 1660, 1545],
        [1660, 1546, 1664, 1547],
        [1664, 1548, 1668, 1549],
        [1668, 1550, 1672, 1551],
        [1672, 1552, 1676, 1553],
    ],
];
